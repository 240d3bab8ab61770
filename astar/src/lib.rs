//! Generic A* search, for graphs supplied by the caller.
//!
//! To search a graph, implement the trait [Graph] which provides
//! the neighbours of each node, the distance between adjacent nodes
//! and optionally a heuristic estimate of the distance remaining.
//! Small graphs can instead be assembled from closures with
//! [FnGraph::builder].
//!
//! ```
//! use astar::{AStar, FnGraph};
//!
//! let graph = FnGraph::builder()
//!     .neighbours(|n: &u32| vec![n + 1, n + 2])
//!     .distance(|a: &u32, b: &u32| Some(if b - a == 1 { 1 } else { 3 }))
//!     .build()
//!     .unwrap();
//!
//! let mut search = AStar::new(graph);
//! search.set_start(0).unwrap();
//! search.set_goal(4);
//! assert!(search.solve().unwrap());
//! assert_eq!(search.length(), Some(4));
//! assert_eq!(search.path(), vec![0, 1, 2, 3, 4]);
//! ```

pub mod algorithm;
mod errors;
pub mod graph;
mod traits;

pub use errors::Result as SearchResult;
pub use errors::SearchError;
pub use traits::Graph;
pub use traits::Score;

pub use algorithm::dijkstra;
pub use algorithm::frontier::Frontier;
pub use algorithm::ledger::Ledger;
pub use algorithm::{AStar, Goal};
pub use graph::{FnGraph, FnGraphBuilder};
