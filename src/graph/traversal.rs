//! Graph traversal algorithms (BFS).

use std::collections::VecDeque;
use std::iter::FusedIterator;

use log::trace;

use super::Graph;

/// Receives traversal events as a [`Bfs`] is consumed.
///
/// Both hooks default to doing nothing.
pub trait BfsObserver {
    /// A new component is about to be expanded from `root`.
    fn on_component_start(&mut self, _root: usize) {}

    /// `node` is being emitted.
    fn on_visit(&mut self, _node: usize) {}
}

impl<T: BfsObserver + ?Sized> BfsObserver for &mut T {
    fn on_component_start(&mut self, root: usize) {
        (**self).on_component_start(root);
    }

    fn on_visit(&mut self, node: usize) {
        (**self).on_visit(node);
    }
}

/// Lazy breadth-first traversal covering every node of a graph.
///
/// The component containing the source comes first. Once its frontier is
/// exhausted, the lowest unvisited node id becomes the root of the next
/// component, and so on until every node has been emitted exactly once.
/// Nodes are marked visited when they are enqueued. Dropping the iterator
/// ends the traversal.
pub struct Bfs<'a> {
    graph: &'a Graph,
    visited: Vec<bool>,
    frontier: VecDeque<usize>,
    /// Next node id to check when the frontier runs dry.
    scan: usize,
    /// Root of a component whose first node has not been emitted yet.
    pending_root: Option<usize>,
    emitted: usize,
    observer: Option<Box<dyn BfsObserver + 'a>>,
}

impl<'a> Bfs<'a> {
    pub(crate) fn new(graph: &'a Graph, source: usize) -> Self {
        let mut bfs = Self {
            graph,
            visited: vec![false; graph.node_count()],
            frontier: VecDeque::new(),
            scan: 0,
            pending_root: None,
            emitted: 0,
            observer: None,
        };
        bfs.seed(source);
        bfs
    }

    /// Attach an observer that sees every component start and visit.
    pub fn with_observer<O>(mut self, observer: O) -> Self
    where
        O: BfsObserver + 'a,
    {
        self.observer = Some(Box::new(observer));
        self
    }

    fn seed(&mut self, root: usize) {
        self.visited[root] = true;
        self.frontier.push_back(root);
        self.pending_root = Some(root);
    }

    fn next_unvisited(&mut self) -> Option<usize> {
        while self.scan < self.visited.len() {
            if !self.visited[self.scan] {
                return Some(self.scan);
            }
            self.scan += 1;
        }
        None
    }
}

impl Iterator for Bfs<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.frontier.is_empty() {
            let root = self.next_unvisited()?;
            self.seed(root);
        }
        let node = self.frontier.pop_front()?;

        if let Some(root) = self.pending_root.take() {
            trace!("bfs: component rooted at {}", root);
            if let Some(observer) = self.observer.as_mut() {
                observer.on_component_start(root);
            }
        }

        // Every queued id was validated against this graph
        if let Ok(edges) = self.graph.adjacent_edges(node) {
            for edge in edges {
                let dest = edge.dest();
                if !self.visited[dest] {
                    self.visited[dest] = true;
                    self.frontier.push_back(dest);
                }
            }
        }

        self.emitted += 1;
        if let Some(observer) = self.observer.as_mut() {
            observer.on_visit(node);
        }
        Some(node)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.visited.len() - self.emitted;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Bfs<'_> {}

impl FusedIterator for Bfs<'_> {}

#[derive(Default)]
struct ComponentCollector {
    components: Vec<Vec<usize>>,
}

impl BfsObserver for ComponentCollector {
    fn on_component_start(&mut self, _root: usize) {
        self.components.push(Vec::new());
    }

    fn on_visit(&mut self, node: usize) {
        if let Some(current) = self.components.last_mut() {
            current.push(node);
        }
    }
}

/// Group the nodes of `graph` by connected component.
///
/// Components are ordered by their lowest node id, and nodes within a
/// component appear in BFS order from that id.
pub fn connected_components(graph: &Graph) -> Vec<Vec<usize>> {
    if graph.node_count() == 0 {
        return Vec::new();
    }
    let mut collector = ComponentCollector::default();
    Bfs::new(graph, 0).with_observer(&mut collector).for_each(drop);
    collector.components
}
