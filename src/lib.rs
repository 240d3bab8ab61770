#![deny(clippy::all)]

//! Checks the `astar` search engine against complete graphs with
//! known shortest paths, and generates new graphs to check against.

use anyhow::Context;
use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use thiserror::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;

use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::str::FromStr;

pub mod check;
pub mod complete;
pub mod generate;
pub mod record;

use crate::generate::GenerateOptions;
use crate::record::Record;

type Error = anyhow::Error;
type BoxedRead = Box<dyn Read + 'static>;
type BoxedWrite = Box<dyn Write + 'static>;

pub fn run() -> Result<(), Error> {
    let matches = App::new("A* checker")
        .version("1.0")
        .author("Alex Rudy <opensource@alexrudy.net>")
        .about("Generate and check shortest path test data")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .multiple(true)
                .help("Log more detail, repeat for even more"),
        )
        .subcommand(
            SubCommand::with_name("generate")
                .about("Write random complete graphs and their shortest paths")
                .arg(
                    Arg::with_name("count")
                        .short("n")
                        .long("count")
                        .value_name("COUNT")
                        .takes_value(true),
                )
                .arg(
                    Arg::with_name("max-nodes")
                        .long("max-nodes")
                        .value_name("N")
                        .takes_value(true),
                )
                .arg(
                    Arg::with_name("seed")
                        .long("seed")
                        .value_name("SEED")
                        .takes_value(true),
                )
                .arg(
                    Arg::with_name("output")
                        .value_name("OUTPUT")
                        .required(false)
                        .index(1),
                ),
        )
        .subcommand(
            SubCommand::with_name("check")
                .about("Search every graph and compare with the recorded length")
                .arg(
                    Arg::with_name("input")
                        .value_name("INPUT")
                        .required(false)
                        .index(1),
                ),
        )
        .get_matches();

    init_logging(matches.occurrences_of("verbose"));

    match matches.subcommand() {
        ("generate", Some(sub)) => {
            let defaults = GenerateOptions::default();
            let options = GenerateOptions {
                count: optional(sub, "count")?.unwrap_or(defaults.count),
                max_nodes: optional(sub, "max-nodes")?.unwrap_or(defaults.max_nodes),
                seed: optional(sub, "seed")?,
            };
            let mut out = BufWriter::new(get_output_writer(sub.value_of("output"))?);
            generate::generate(&options, &mut out)?;
            out.flush()?;
            Ok(())
        }
        ("check", Some(sub)) => {
            let mut text = String::new();
            get_input_reader(sub.value_of("input"))?.read_to_string(&mut text)?;
            let records = Record::parse_all(&text)?;

            let outcomes = check::check_all(&records)?;
            let failed = outcomes.iter().filter(|o| !o.passed()).count();
            info!(total = outcomes.len(), failed, "checked graphs");
            println!("{}/{} graphs matched", outcomes.len() - failed, outcomes.len());

            if failed > 0 {
                Err(DriverError::Mismatch(failed, outcomes.len()).into())
            } else {
                Ok(())
            }
        }
        (name, _) => Err(DriverError::UnknownCommand(name.to_string()).into()),
    }
}

fn init_logging(verbosity: u64) {
    let default = match verbosity {
        0 => "astar_check=info",
        1 => "astar_check=debug,astar=debug",
        _ => "astar_check=trace,astar=trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn optional<T>(matches: &ArgMatches, name: &str) -> Result<Option<T>, Error>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    matches
        .value_of(name)
        .map(|v| v.parse::<T>())
        .transpose()
        .with_context(|| format!("Invalid value for --{}", name))
}

/// Read from the named file, or stdin for `-` or no name at all.
pub fn get_input_reader(filename: Option<&str>) -> Result<BoxedRead, DriverError> {
    let reader: BoxedRead = match filename {
        Some("-") | None => Box::new(io::stdin()),
        Some(path) => {
            let f = File::open(path)
                .map_err(|e| DriverError::InputNotFound(path.to_string(), e))?;
            Box::new(f)
        }
    };
    Ok(reader)
}

/// Write to the named file, or stdout for `-` or no name at all.
pub fn get_output_writer(filename: Option<&str>) -> Result<BoxedWrite, DriverError> {
    let writer: BoxedWrite = match filename {
        Some("-") | None => Box::new(io::stdout()),
        Some(path) => {
            let f = File::create(path)
                .map_err(|e| DriverError::OutputNotWritable(path.to_string(), e))?;
            Box::new(f)
        }
    };
    Ok(writer)
}

#[derive(Debug, Error)]
pub enum DriverError {
    #[error("Input not found: {0}")]
    InputNotFound(String, #[source] io::Error),

    #[error("Can't write output to {0}")]
    OutputNotWritable(String, #[source] io::Error),

    #[error("Unknown command {0}")]
    UnknownCommand(String),

    #[error("Expected {expected} at value {position}, found {found:?}")]
    Parse {
        expected: &'static str,
        position: usize,
        found: String,
    },

    #[error("Input ended while reading {0}")]
    Truncated(&'static str),

    #[error("Endpoint {endpoint} is not a node in a graph of {nodes} nodes")]
    EndpointOutOfRange { endpoint: usize, nodes: usize },

    #[error("Expected {nodes} x {nodes} weights, got {weights}")]
    Shape { nodes: usize, weights: usize },

    #[error("A graph of {0} nodes is too large")]
    TooLarge(usize),

    #[error("Graphs need at least one node")]
    NoNodes,

    #[error("No path from {from} to {to}")]
    Unreachable { from: usize, to: usize },

    #[error("{0} of {1} graphs did not match their recorded shortest path")]
    Mismatch(usize, usize),
}
