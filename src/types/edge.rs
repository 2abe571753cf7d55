//! The core edge struct.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One connection between two nodes.
///
/// For an undirected graph `src` and `dst` are simply the two endpoints; the
/// graph stores each non-loop edge twice, once from each side. The weight is
/// carried along but ignored by every unweighted operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Edge {
    src: usize,
    dst: usize,
    #[serde(default)]
    weight: i64,
}

impl Edge {
    /// Create an unweighted edge.
    pub fn new(src: usize, dst: usize) -> Self {
        Self { src, dst, weight: 0 }
    }

    /// Create an edge with an explicit weight.
    pub fn weighted(src: usize, dst: usize, weight: i64) -> Self {
        Self { src, dst, weight }
    }

    /// Source endpoint.
    pub fn src(&self) -> usize {
        self.src
    }

    /// Destination endpoint.
    pub fn dest(&self) -> usize {
        self.dst
    }

    /// Weight of the edge. Ignore for unweighted graphs.
    pub fn weight(&self) -> i64 {
        self.weight
    }

    pub fn set_src(&mut self, src: usize) {
        self.src = src;
    }

    pub fn set_dest(&mut self, dst: usize) {
        self.dst = dst;
    }

    pub fn set_weight(&mut self, weight: i64) {
        self.weight = weight;
    }

    /// The mirrored record: endpoints swapped, same weight.
    pub fn reversed(&self) -> Self {
        Self {
            src: self.dst,
            dst: self.src,
            weight: self.weight,
        }
    }

    /// Whether both endpoints are the same node.
    pub fn is_self_loop(&self) -> bool {
        self.src == self.dst
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.src, self.dst)
    }
}
