//! adjgraph — undirected graphs over integer node ids.
//!
//! Each node owns an adjacency list; undirected edges are stored as a record
//! on both endpoints. Traversal is a lazy breadth-first iterator that walks
//! every component of the graph, not only the one containing the source.

pub mod cli;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{connected_components, AdjacentEdges, Bfs, BfsObserver, Graph, GraphBuilder};
pub use types::{Edge, GraphError, GraphResult};
