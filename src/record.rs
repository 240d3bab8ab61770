//! Reading and writing shortest path test data.
//!
//! Each record is a complete graph along with the endpoints of a search
//! and the length of the shortest path between them:
//!
//! ```text
//! 3
//! 0 2
//! 0 1 5
//! 1 0 1
//! 5 1 0
//! 2
//!
//! ```
//!
//! The first line is the number of nodes, the second the source and target,
//! then one line per row of the weight matrix and finally the expected length.
//! Any whitespace separates values, records follow one another until the end
//! of the input.

use std::io::{self, Write};
use std::str::{FromStr, SplitWhitespace};

use crate::complete::{round, CompleteGraph};
use crate::DriverError;

/// One graph and the answer expected when searching it.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub graph: CompleteGraph,
    pub source: usize,
    pub target: usize,
    pub expected: f64,
}

/// Whitespace separated values, remembering how many have been read
/// so that errors can say where they happened.
struct Tokens<'a> {
    inner: SplitWhitespace<'a>,
    position: usize,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            inner: text.split_whitespace(),
            position: 0,
        }
    }

    fn next_opt<T: FromStr>(
        &mut self,
        expected: &'static str,
    ) -> Result<Option<T>, DriverError> {
        match self.inner.next() {
            None => Ok(None),
            Some(token) => {
                self.position += 1;
                token
                    .parse()
                    .map(Some)
                    .map_err(|_| DriverError::Parse {
                        expected,
                        position: self.position,
                        found: token.to_string(),
                    })
            }
        }
    }

    fn next<T: FromStr>(&mut self, expected: &'static str) -> Result<T, DriverError> {
        self.next_opt(expected)?
            .ok_or(DriverError::Truncated(expected))
    }
}

impl Record {
    /// Parse every record in the text.
    pub fn parse_all(text: &str) -> Result<Vec<Record>, DriverError> {
        let mut tokens = Tokens::new(text);
        let mut records = Vec::new();

        while let Some(nodes) = tokens.next_opt::<usize>("node count")? {
            let source: usize = tokens.next("source")?;
            let target: usize = tokens.next("target")?;
            for &endpoint in &[source, target] {
                if endpoint >= nodes {
                    return Err(DriverError::EndpointOutOfRange { endpoint, nodes });
                }
            }

            let cells = nodes
                .checked_mul(nodes)
                .ok_or(DriverError::TooLarge(nodes))?;
            let weights = (0..cells)
                .map(|_| tokens.next::<f64>("weight"))
                .collect::<Result<Vec<f64>, DriverError>>()?;
            let expected: f64 = tokens.next("shortest path length")?;

            records.push(Record {
                graph: CompleteGraph::new(nodes, weights)?,
                source,
                target,
                expected,
            });
        }

        Ok(records)
    }

    /// Write this record, with the expected length rounded
    /// to the same precision as the weights.
    pub fn write<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self.graph.len())?;
        writeln!(out, "{} {}", self.source, self.target)?;
        for row in self.graph.rows() {
            let line: Vec<String> = row.iter().map(|w| w.to_string()).collect();
            writeln!(out, "{}", line.join(" "))?;
        }
        writeln!(out, "{}", round(self.expected))?;
        writeln!(out)
    }
}
