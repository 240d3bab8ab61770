use thiserror::Error;

/// Error produced when a search is misconfigured or misused.
///
/// Failing to find a path is not an error: [crate::AStar::solve]
/// reports that as `Ok(false)`.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Search is missing its {0}")]
    Unconfigured(&'static str),

    #[error("Can't pop from an empty frontier")]
    EmptyFrontier,

    #[error("Node {0} is not in the frontier")]
    NodeNotFound(String),

    #[error("Node {0} was in the frontier without a cost")]
    MissingCost(String),

    #[error("Node {0} is already in the frontier")]
    DuplicateNode(String),

    #[error("No edge from {from} to {to}, but {to} was reported as a neighbour")]
    NotAdjacent { from: String, to: String },

    #[error("Cost {0} can't be ordered")]
    UnorderedCost(String),
}

/// Result when a search method might fail.
pub type Result<T> = std::result::Result<T, SearchError>;
