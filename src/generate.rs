//! Random test data, with answers from an independent search.

use std::io::Write;

use anyhow::Error;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use astar::dijkstra;

use crate::complete::CompleteGraph;
use crate::record::Record;
use crate::DriverError;

pub const DEFAULT_COUNT: usize = 1000;
pub const DEFAULT_MAX_NODES: usize = 50;

#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Number of graphs to write.
    pub count: usize,

    /// Graphs have between 1 and this many nodes.
    pub max_nodes: usize,

    /// Seed for reproducible output. Uses system entropy when unset.
    pub seed: Option<u64>,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            max_nodes: DEFAULT_MAX_NODES,
            seed: None,
        }
    }
}

/// Build a single random record, solving it with Dijkstra's algorithm.
pub fn random_record<R: Rng>(rng: &mut R, max_nodes: usize) -> Result<Record, Error> {
    let nodes = rng.gen_range(1..=max_nodes);
    let graph = CompleteGraph::random(nodes, rng);
    let source = rng.gen_range(0..nodes);
    let target = rng.gen_range(0..nodes);

    let expected = dijkstra::shortest_path_length(&graph, source, |n| *n == target)?
        .ok_or(DriverError::Unreachable {
            from: source,
            to: target,
        })?;

    Ok(Record {
        graph,
        source,
        target,
        expected,
    })
}

/// Write `options.count` random records, returning how many were written.
pub fn generate<W: Write>(options: &GenerateOptions, out: &mut W) -> Result<usize, Error> {
    if options.max_nodes == 0 {
        return Err(DriverError::NoNodes.into());
    }

    let mut rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    for i in 0..options.count {
        let record = random_record(&mut rng, options.max_nodes)?;
        debug!(
            index = i,
            nodes = record.graph.len(),
            expected = record.expected,
            "generated graph"
        );
        record.write(out)?;
    }

    info!(count = options.count, "wrote test data");
    Ok(options.count)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::check::check_all;

    fn seeded(count: usize, max_nodes: usize) -> String {
        let options = GenerateOptions {
            count,
            max_nodes,
            seed: Some(42),
        };
        let mut out = Vec::new();
        assert_eq!(generate(&options, &mut out).unwrap(), count);
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn generated_data_checks_out() {
        let text = seeded(100, 30);
        let records = Record::parse_all(&text).unwrap();
        assert_eq!(records.len(), 100);
        assert!(records.iter().all(|r| (1..=30).contains(&r.graph.len())));

        let outcomes = check_all(&records).unwrap();
        let failed: Vec<_> = outcomes.iter().filter(|o| !o.passed()).collect();
        assert!(failed.is_empty(), "Mismatched: {:?}", failed);
    }

    #[test]
    fn seeds_are_reproducible() {
        assert_eq!(seeded(5, 10), seeded(5, 10));
    }

    #[test]
    fn needs_nodes() {
        let options = GenerateOptions {
            max_nodes: 0,
            ..GenerateOptions::default()
        };
        let mut out = Vec::new();
        assert!(generate(&options, &mut out).is_err());
        assert!(out.is_empty());
    }
}
