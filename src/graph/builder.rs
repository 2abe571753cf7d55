//! Fluent API for building Graph instances.

use crate::types::{Edge, GraphResult};

use super::Graph;

/// Fluent builder for constructing a Graph.
///
/// Links are recorded as given and applied in order by [`GraphBuilder::build`],
/// so an out-of-range or repeated link surfaces as the error `add_edge` would
/// return for it.
pub struct GraphBuilder {
    node_count: usize,
    edges: Vec<Edge>,
}

impl GraphBuilder {
    /// Create a new builder for a graph with `node_count` nodes.
    pub fn new(node_count: usize) -> Self {
        Self {
            node_count,
            edges: Vec::new(),
        }
    }

    /// Add an unweighted edge between two nodes.
    pub fn link(&mut self, u: usize, v: usize) -> &mut Self {
        self.edges.push(Edge::new(u, v));
        self
    }

    /// Add a weighted edge between two nodes.
    pub fn link_weighted(&mut self, u: usize, v: usize, weight: i64) -> &mut Self {
        self.edges.push(Edge::weighted(u, v, weight));
        self
    }

    /// Number of links recorded so far.
    pub fn link_count(&self) -> usize {
        self.edges.len()
    }

    /// Build the final Graph.
    pub fn build(self) -> GraphResult<Graph> {
        Graph::from_edges(self.node_count, self.edges)
    }
}
