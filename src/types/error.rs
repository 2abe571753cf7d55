//! Error types for the adjgraph library.

use thiserror::Error;

/// All errors that can occur in the adjgraph library.
#[derive(Error, Debug)]
pub enum GraphError {
    /// Node id outside `[0, node_count)`.
    #[error("Node {0} is not a valid node in the graph")]
    InvalidNode(usize),

    /// Either endpoint of the edge is not a valid node.
    #[error("Edge ({src},{dst}) is not valid")]
    InvalidEdge { src: usize, dst: usize },

    /// The edge is already present.
    #[error("Edge ({src},{dst}) is already present in the graph")]
    DuplicateEdge { src: usize, dst: usize },

    /// The edge to delete is not present.
    #[error("Edge ({src},{dst}) is not present in the graph")]
    EdgeNotFound { src: usize, dst: usize },

    /// Requested node count exceeds what a graph may allocate.
    #[error("Node count {requested} exceeds maximum of {max}")]
    TooManyNodes { requested: usize, max: usize },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed graph description.
    #[error("Malformed graph description: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
