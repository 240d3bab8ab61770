//! Compare A* search results against recorded shortest paths.

use tracing::{debug, warn};

use astar::{AStar, SearchResult};

use crate::complete::CompleteGraph;
use crate::record::Record;

/// Recorded lengths are rounded, so allow for that when comparing.
pub const TOLERANCE: f64 = 1e-3;

/// Compare to within roundoff error
pub fn close_enough(a: f64, b: f64) -> bool {
    (a - b).abs() < TOLERANCE
}

/// What the search found for a single record.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub index: usize,
    pub source: usize,
    pub target: usize,
    pub expected: f64,
    pub found: Option<f64>,
    pub path: Vec<usize>,

    /// Sum of the edge weights along `path`.
    pub walked: Option<f64>,
}

impl Outcome {
    /// The length matches the record, and the path backs it up.
    pub fn passed(&self) -> bool {
        self.found
            .map(|f| close_enough(f, self.expected))
            .unwrap_or(false)
            && self.path_is_valid()
    }

    /// The path runs from source to target, and walking
    /// it costs the length the search reported.
    pub fn path_is_valid(&self) -> bool {
        let ends =
            self.path.first() == Some(&self.source) && self.path.last() == Some(&self.target);
        match (self.walked, self.found) {
            (Some(walked), Some(found)) => ends && close_enough(walked, found),
            _ => false,
        }
    }
}

fn walk(graph: &CompleteGraph, path: &[usize]) -> Option<f64> {
    if path.is_empty() {
        return None;
    }
    path.windows(2).map(|pair| graph.weight(pair[0], pair[1])).sum()
}

/// Search one record's graph from source to target, without a heuristic.
pub fn check_record(index: usize, record: &Record) -> SearchResult<Outcome> {
    let mut search = AStar::new(&record.graph);
    search.set_start(record.source)?;
    search.set_goal(record.target);

    let (found, path) = if search.solve()? {
        (search.length(), search.path())
    } else {
        (None, Vec::new())
    };

    let outcome = Outcome {
        index,
        source: record.source,
        target: record.target,
        expected: record.expected,
        found,
        walked: walk(&record.graph, &path),
        path,
    };

    if outcome.passed() {
        debug!(
            index,
            nodes = record.graph.len(),
            expanded = search.expanded(),
            "graph matched"
        );
    } else {
        warn!(
            index,
            expected = outcome.expected,
            found = ?outcome.found,
            walked = ?outcome.walked,
            path_valid = outcome.path_is_valid(),
            "graph did not match"
        );
    }
    Ok(outcome)
}

pub fn check_all(records: &[Record]) -> SearchResult<Vec<Outcome>> {
    records
        .iter()
        .enumerate()
        .map(|(i, r)| check_record(i, r))
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn sample_data() {
        let records = Record::parse_all(include_str!("../data/sample.txt")).unwrap();
        let outcomes = check_all(&records).unwrap();

        assert!(outcomes.iter().all(|o| o.passed()));
        assert_eq!(outcomes[0].path, vec![0, 1, 2]);
        assert_eq!(outcomes[1].path, vec![0]);
        assert_eq!(outcomes[1].found, Some(0.0));
        assert_eq!(outcomes[2].path, vec![3, 1, 2, 0]);
        assert!(outcomes.iter().all(|o| o.path_is_valid()));
        assert_eq!(outcomes[1].walked, Some(0.0));
    }

    #[test]
    fn path_has_to_add_up() {
        let graph = CompleteGraph::new(3, vec![0.0, 1.0, 5.0, 1.0, 0.0, 1.0, 5.0, 1.0, 0.0])
            .unwrap();
        let good = Outcome {
            index: 0,
            source: 0,
            target: 2,
            expected: 2.0,
            found: Some(2.0),
            walked: walk(&graph, &[0, 1, 2]),
            path: vec![0, 1, 2],
        };
        assert!(good.passed());

        // Right length, but the edges walked cost 5.
        let shortcut = Outcome {
            walked: walk(&graph, &[0, 2]),
            path: vec![0, 2],
            ..good.clone()
        };
        assert_eq!(shortcut.walked, Some(5.0));
        assert!(!shortcut.path_is_valid());
        assert!(!shortcut.passed());

        let wrong_end = Outcome {
            walked: walk(&graph, &[0, 1]),
            path: vec![0, 1],
            found: Some(1.0),
            expected: 1.0,
            ..good.clone()
        };
        assert!(!wrong_end.passed());

        let wrong_start = Outcome {
            walked: walk(&graph, &[1, 2]),
            path: vec![1, 2],
            found: Some(1.0),
            expected: 1.0,
            ..good.clone()
        };
        assert!(!wrong_start.passed());

        let empty = Outcome {
            walked: walk(&graph, &[]),
            path: Vec::new(),
            ..good
        };
        assert_eq!(empty.walked, None);
        assert!(!empty.passed());
    }

    #[test]
    fn wrong_answer() {
        let record = Record {
            graph: CompleteGraph::new(2, vec![0.0, 0.5, 0.5, 0.0]).unwrap(),
            source: 0,
            target: 1,
            expected: 0.25,
        };

        let outcome = check_record(7, &record).unwrap();
        assert_eq!(outcome.index, 7);
        assert_eq!(outcome.found, Some(0.5));
        assert!(!outcome.passed());
    }

    #[test]
    fn tolerance() {
        assert!(close_enough(0.6, 0.6000000000000001));
        assert!(close_enough(1.0, 1.0009));
        assert!(!close_enough(1.0, 1.002));
    }
}
