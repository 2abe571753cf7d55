//! Core graph structure — one adjacency list per node.

use std::collections::vec_deque;
use std::collections::VecDeque;
use std::fmt;
use std::iter::FusedIterator;

use log::debug;

use crate::types::{Edge, GraphError, GraphResult, MAX_NODE_COUNT};

use super::traversal::{self, Bfs};

/// An undirected graph over the node ids `0..node_count`.
///
/// Every non-loop edge is stored as two records, `(u,v)` in the list of `u`
/// and the mirrored `(v,u)` in the list of `v`. A self-loop is stored once.
/// New records are always pushed to the front of a list, so iteration yields
/// the most recently added edge first.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    /// Adjacency lists, indexed by node id.
    adjacency: Vec<VecDeque<Edge>>,
    /// Number of logical undirected edges.
    edge_count: usize,
}

impl Graph {
    /// Create a graph with `node_count` nodes and no edges.
    pub fn new(node_count: usize) -> Self {
        Self {
            adjacency: vec![VecDeque::new(); node_count],
            edge_count: 0,
        }
    }

    /// Create a graph with `node_count` nodes, failing instead of panicking
    /// when the count is above [`MAX_NODE_COUNT`] or cannot be allocated.
    pub fn try_new(node_count: usize) -> GraphResult<Self> {
        let too_many = GraphError::TooManyNodes {
            requested: node_count,
            max: MAX_NODE_COUNT,
        };
        if node_count > MAX_NODE_COUNT {
            return Err(too_many);
        }
        let mut adjacency = Vec::new();
        adjacency.try_reserve_exact(node_count).map_err(|_| too_many)?;
        adjacency.resize_with(node_count, VecDeque::new);
        Ok(Self {
            adjacency,
            edge_count: 0,
        })
    }

    /// Create a graph and add `edges` in order.
    ///
    /// Fails on an oversized node count or on the first edge `add_edge`
    /// rejects.
    pub fn from_edges<I>(node_count: usize, edges: I) -> GraphResult<Self>
    where
        I: IntoIterator<Item = Edge>,
    {
        let mut graph = Self::try_new(node_count)?;
        for edge in edges {
            graph.add_edge(edge)?;
        }
        Ok(graph)
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of logical undirected edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_valid_node(&self, id: usize) -> bool {
        id < self.node_count()
    }

    pub fn is_valid_edge(&self, edge: &Edge) -> bool {
        self.is_valid_node(edge.src()) && self.is_valid_node(edge.dest())
    }

    /// Iterate the edges stored for `source`, most recently added first.
    pub fn adjacent_edges(&self, source: usize) -> GraphResult<AdjacentEdges<'_>> {
        if !self.is_valid_node(source) {
            return Err(GraphError::InvalidNode(source));
        }
        Ok(AdjacentEdges {
            inner: self.adjacency[source].iter(),
        })
    }

    /// Iterate the neighbour ids of `source` in adjacency order.
    pub fn neighbors(&self, source: usize) -> GraphResult<impl Iterator<Item = usize> + '_> {
        Ok(self.adjacent_edges(source)?.map(|edge| edge.dest()))
    }

    /// Number of records in the adjacency list of `node`.
    pub fn degree(&self, node: usize) -> GraphResult<usize> {
        Ok(self.adjacent_edges(node)?.len())
    }

    /// Whether `edge` is stored, looking only at the source-side list.
    pub fn present(&self, edge: &Edge) -> bool {
        if !self.is_valid_edge(edge) {
            return false;
        }
        match self.adjacent_edges(edge.src()) {
            Ok(mut edges) => edges.any(|stored| stored.dest() == edge.dest()),
            Err(_) => false,
        }
    }

    /// Add an undirected edge.
    pub fn add_edge(&mut self, edge: Edge) -> GraphResult<()> {
        if !self.is_valid_edge(&edge) {
            return Err(GraphError::InvalidEdge {
                src: edge.src(),
                dst: edge.dest(),
            });
        }
        if self.present(&edge) {
            return Err(GraphError::DuplicateEdge {
                src: edge.src(),
                dst: edge.dest(),
            });
        }

        if !edge.is_self_loop() {
            self.adjacency[edge.dest()].push_front(edge.reversed());
        }
        self.adjacency[edge.src()].push_front(edge);
        self.edge_count += 1;

        debug!("added edge {} ({} edges)", edge, self.edge_count);
        Ok(())
    }

    /// Delete an undirected edge, returning the source-side record.
    ///
    /// Only the endpoints are matched; the weight of `edge` is ignored.
    pub fn delete_edge(&mut self, edge: Edge) -> GraphResult<Edge> {
        if !self.is_valid_edge(&edge) {
            return Err(GraphError::InvalidEdge {
                src: edge.src(),
                dst: edge.dest(),
            });
        }
        let pos = position_of(&self.adjacency[edge.src()], edge.dest()).ok_or(
            GraphError::EdgeNotFound {
                src: edge.src(),
                dst: edge.dest(),
            },
        )?;

        if !edge.is_self_loop() {
            let mirror_list = &mut self.adjacency[edge.dest()];
            let mirror = position_of(mirror_list, edge.src());
            debug_assert!(mirror.is_some(), "missing mirror record for {}", edge);
            if let Some(mirror) = mirror {
                mirror_list.remove(mirror);
            }
        }
        let removed = self.adjacency[edge.src()]
            .remove(pos)
            .ok_or(GraphError::EdgeNotFound {
                src: edge.src(),
                dst: edge.dest(),
            })?;
        self.edge_count -= 1;

        debug!("deleted edge {} ({} edges)", removed, self.edge_count);
        Ok(removed)
    }

    /// Every logical edge once, oriented from the lower endpoint.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.adjacency
            .iter()
            .flat_map(|list| list.iter().copied())
            .filter(|edge| edge.src() <= edge.dest())
    }

    /// Breadth-first traversal over every node, starting with the component
    /// that contains `source`.
    pub fn breadth_first_search(&self, source: usize) -> GraphResult<Bfs<'_>> {
        if !self.is_valid_node(source) {
            return Err(GraphError::InvalidNode(source));
        }
        Ok(Bfs::new(self, source))
    }

    /// Node ids grouped by connected component, in traversal order.
    pub fn connected_components(&self) -> Vec<Vec<usize>> {
        traversal::connected_components(self)
    }

    /// Check the storage invariants: records sit in their source's list,
    /// every non-loop record has exactly one mirror, and `edge_count`
    /// matches the stored records.
    pub fn is_consistent(&self) -> bool {
        let mut loops = 0;
        let mut records = 0;
        for (node, list) in self.adjacency.iter().enumerate() {
            for edge in list {
                if edge.src() != node || !self.is_valid_node(edge.dest()) {
                    return false;
                }
                if count_to(list, edge.dest()) != 1 {
                    return false;
                }
                if edge.is_self_loop() {
                    loops += 1;
                    continue;
                }
                records += 1;
                let mirrors = self.adjacency[edge.dest()]
                    .iter()
                    .filter(|m| m.dest() == node && m.weight() == edge.weight())
                    .count();
                if mirrors != 1 {
                    return false;
                }
            }
        }
        records % 2 == 0 && loops + records / 2 == self.edge_count
    }
}

fn position_of(list: &VecDeque<Edge>, dest: usize) -> Option<usize> {
    list.iter().position(|edge| edge.dest() == dest)
}

fn count_to(list: &VecDeque<Edge>, dest: usize) -> usize {
    list.iter().filter(|edge| edge.dest() == dest).count()
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Graph: {} nodes, {} edges",
            self.node_count(),
            self.edge_count
        )?;
        for (node, list) in self.adjacency.iter().enumerate() {
            write!(f, "\n{}:", node)?;
            for edge in list {
                write!(f, " {}", edge)?;
            }
        }
        Ok(())
    }
}

/// Single-pass iterator over one node's adjacency list.
///
/// Borrows the graph, so the list cannot change while it is being read.
#[derive(Debug, Clone)]
pub struct AdjacentEdges<'a> {
    inner: vec_deque::Iter<'a, Edge>,
}

impl Iterator for AdjacentEdges<'_> {
    type Item = Edge;

    fn next(&mut self) -> Option<Edge> {
        self.inner.next().copied()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for AdjacentEdges<'_> {}

impl FusedIterator for AdjacentEdges<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn adjacency_of(graph: &Graph, node: usize) -> Vec<(usize, usize)> {
        graph
            .adjacent_edges(node)
            .unwrap()
            .map(|e| (e.src(), e.dest()))
            .collect()
    }

    #[test]
    fn new_graph_is_empty() {
        let graph = Graph::new(4);
        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.edge_count(), 0);
        for node in 0..4 {
            assert_eq!(graph.degree(node).unwrap(), 0);
        }
        assert!(graph.is_consistent());
    }

    #[test]
    fn try_new_rejects_oversized_counts() {
        assert!(matches!(
            Graph::try_new(usize::MAX),
            Err(GraphError::TooManyNodes { requested: usize::MAX, max: MAX_NODE_COUNT })
        ));
        assert!(Graph::try_new(MAX_NODE_COUNT + 1).is_err());

        let graph = Graph::try_new(5).unwrap();
        assert_eq!(graph.node_count(), 5);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn zero_node_graph_rejects_everything() {
        let mut graph = Graph::new(0);
        assert!(!graph.is_valid_node(0));
        assert!(matches!(
            graph.add_edge(Edge::new(0, 0)),
            Err(GraphError::InvalidEdge { .. })
        ));
        assert!(graph.breadth_first_search(0).is_err());
    }

    #[test]
    fn add_stores_mirror_at_front() {
        let mut graph = Graph::new(3);
        graph.add_edge(Edge::new(0, 1)).unwrap();
        graph.add_edge(Edge::new(0, 2)).unwrap();

        assert_eq!(adjacency_of(&graph, 0), vec![(0, 2), (0, 1)]);
        assert_eq!(adjacency_of(&graph, 1), vec![(1, 0)]);
        assert_eq!(adjacency_of(&graph, 2), vec![(2, 0)]);
    }

    #[test]
    fn self_loop_stored_once() {
        let mut graph = Graph::new(2);
        graph.add_edge(Edge::new(1, 1)).unwrap();
        assert_eq!(adjacency_of(&graph, 1), vec![(1, 1)]);
        assert_eq!(graph.edge_count(), 1);
        assert!(graph.is_consistent());

        graph.delete_edge(Edge::new(1, 1)).unwrap();
        assert_eq!(graph.degree(1).unwrap(), 0);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn delete_removes_matching_records_only() {
        let mut graph = Graph::new(4);
        graph.add_edge(Edge::new(0, 1)).unwrap();
        graph.add_edge(Edge::new(0, 2)).unwrap();
        graph.add_edge(Edge::new(3, 0)).unwrap();

        let removed = graph.delete_edge(Edge::new(2, 0)).unwrap();
        assert_eq!((removed.src(), removed.dest()), (2, 0));
        assert_eq!(adjacency_of(&graph, 0), vec![(0, 3), (0, 1)]);
        assert_eq!(graph.degree(2).unwrap(), 0);
        assert!(graph.is_consistent());
    }

    #[test]
    fn delete_returns_stored_weight() {
        let mut graph = Graph::new(2);
        graph.add_edge(Edge::weighted(0, 1, 12)).unwrap();
        let removed = graph.delete_edge(Edge::new(1, 0)).unwrap();
        assert_eq!(removed.weight(), 12);
    }

    #[test]
    fn edges_reports_each_logical_edge_once() {
        let mut graph = Graph::new(3);
        graph.add_edge(Edge::new(2, 1)).unwrap();
        graph.add_edge(Edge::new(0, 1)).unwrap();
        graph.add_edge(Edge::new(2, 2)).unwrap();

        let mut edges: Vec<(usize, usize)> =
            graph.edges().map(|e| (e.src(), e.dest())).collect();
        edges.sort_unstable();
        assert_eq!(edges, vec![(0, 1), (1, 2), (2, 2)]);
    }

    #[test]
    fn adjacent_edges_is_exact_size() {
        let mut graph = Graph::new(3);
        graph.add_edge(Edge::new(0, 1)).unwrap();
        graph.add_edge(Edge::new(0, 2)).unwrap();
        let mut iter = graph.adjacent_edges(0).unwrap();
        assert_eq!(iter.len(), 2);
        iter.next();
        assert_eq!(iter.len(), 1);
    }

    #[test]
    fn display_lists_adjacency() {
        let mut graph = Graph::new(3);
        graph.add_edge(Edge::new(0, 1)).unwrap();
        graph.add_edge(Edge::new(2, 2)).unwrap();
        assert_eq!(
            graph.to_string(),
            "Graph: 3 nodes, 2 edges\n0: (0,1)\n1: (1,0)\n2: (2,2)"
        );
    }

    #[test]
    fn inconsistency_is_detected() {
        let mut graph = Graph::new(2);
        graph.add_edge(Edge::new(0, 1)).unwrap();
        graph.adjacency[1].clear();
        assert!(!graph.is_consistent());
    }
}
