//! All data types for the adjgraph library.

pub mod edge;
pub mod error;

pub use edge::Edge;
pub use error::{GraphError, GraphResult};

/// Largest node count accepted by `Graph::try_new` and graph descriptions.
pub const MAX_NODE_COUNT: usize = 1 << 26;
