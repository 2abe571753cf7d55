//! CLI command implementations.
//!
//! Every command loads a graph description from a JSON file of the form
//! `{"nodes": 3, "edges": [{"src": 0, "dst": 1}, {"src": 2, "dst": 2, "weight": 4}]}`
//! and writes its report to `out`.

use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::graph::Graph;
use crate::types::{Edge, GraphError, GraphResult};

/// On-disk description of a graph: a node count and the edges to add, in order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphDescription {
    /// Number of nodes.
    pub nodes: usize,
    /// Edges, added front-to-back.
    #[serde(default)]
    pub edges: Vec<Edge>,
}

impl GraphDescription {
    /// Build the described graph.
    pub fn into_graph(self) -> GraphResult<Graph> {
        Graph::from_edges(self.nodes, self.edges)
    }
}

/// Read and build the graph described by the JSON file at `path`.
pub fn load_graph(path: &Path) -> GraphResult<Graph> {
    let data = std::fs::read_to_string(path)?;
    let description: GraphDescription = serde_json::from_str(&data)?;
    log::debug!(
        "loaded {} ({} nodes, {} edges listed)",
        path.display(),
        description.nodes,
        description.edges.len()
    );
    description.into_graph()
}

/// Display node and edge counts with per-node degrees.
pub fn cmd_info(path: &Path, json: bool, out: &mut dyn Write) -> GraphResult<()> {
    let graph = load_graph(path)?;
    let degrees = (0..graph.node_count())
        .map(|node| graph.degree(node))
        .collect::<GraphResult<Vec<usize>>>()?;

    if json {
        let info = serde_json::json!({
            "file": path.display().to_string(),
            "nodes": graph.node_count(),
            "edges": graph.edge_count(),
            "degrees": degrees,
        });
        writeln!(out, "{}", serde_json::to_string_pretty(&info)?)?;
    } else {
        writeln!(out, "File: {}", path.display())?;
        writeln!(out, "Nodes: {}", graph.node_count())?;
        writeln!(out, "Edges: {}", graph.edge_count())?;
        writeln!(out, "Degrees:")?;
        for (node, degree) in degrees.iter().enumerate() {
            writeln!(out, "  {}: {}", node, degree)?;
        }
    }
    Ok(())
}

/// Print the breadth-first visit order starting at `source`.
pub fn cmd_bfs(path: &Path, source: usize, json: bool, out: &mut dyn Write) -> GraphResult<()> {
    let graph = load_graph(path)?;
    let order: Vec<usize> = graph.breadth_first_search(source)?.collect();

    if json {
        writeln!(
            out,
            "{}",
            serde_json::json!({"source": source, "order": order})
        )?;
    } else {
        let order: Vec<String> = order.iter().map(|id| id.to_string()).collect();
        writeln!(out, "BFS from {}: {}", source, order.join(" "))?;
    }
    Ok(())
}

/// Print the connected components.
pub fn cmd_components(path: &Path, json: bool, out: &mut dyn Write) -> GraphResult<()> {
    let graph = load_graph(path)?;
    let components = graph.connected_components();

    if json {
        writeln!(
            out,
            "{}",
            serde_json::json!({"count": components.len(), "components": components})
        )?;
    } else {
        writeln!(out, "{} component(s)", components.len())?;
        for (i, component) in components.iter().enumerate() {
            let ids: Vec<String> = component.iter().map(|id| id.to_string()).collect();
            writeln!(out, "  [{}] {}", i, ids.join(" "))?;
        }
    }
    Ok(())
}

/// Dump adjacency lists, either for every node or for a single one.
pub fn cmd_adjacency(
    path: &Path,
    node: Option<usize>,
    json: bool,
    out: &mut dyn Write,
) -> GraphResult<()> {
    let graph = load_graph(path)?;

    match (node, json) {
        (Some(node), true) => {
            let edges: Vec<Edge> = graph.adjacent_edges(node)?.collect();
            writeln!(
                out,
                "{}",
                serde_json::json!({"node": node, "edges": edges})
            )?;
        }
        (Some(node), false) => {
            let edges: Vec<String> = graph
                .adjacent_edges(node)?
                .map(|edge| edge.to_string())
                .collect();
            writeln!(out, "{}: {}", node, edges.join(" "))?;
        }
        (None, true) => {
            let lists = (0..graph.node_count())
                .map(|n| graph.adjacent_edges(n).map(|edges| edges.collect::<Vec<Edge>>()))
                .collect::<GraphResult<Vec<_>>>()?;
            let dump = serde_json::json!({
                "nodes": graph.node_count(),
                "edges": graph.edge_count(),
                "adjacency": lists,
            });
            writeln!(out, "{}", serde_json::to_string_pretty(&dump)?)?;
        }
        (None, false) => writeln!(out, "{}", graph)?,
    }
    Ok(())
}

/// Report whether the edge `(src,dst)` is present.
///
/// Out-of-range endpoints are reported as an error rather than as absent.
pub fn cmd_present(
    path: &Path,
    src: usize,
    dst: usize,
    json: bool,
    out: &mut dyn Write,
) -> GraphResult<()> {
    let graph = load_graph(path)?;
    let edge = Edge::new(src, dst);
    if !graph.is_valid_edge(&edge) {
        return Err(GraphError::InvalidEdge { src, dst });
    }
    let present = graph.present(&edge);

    if json {
        writeln!(
            out,
            "{}",
            serde_json::json!({"src": src, "dst": dst, "present": present})
        )?;
    } else if present {
        writeln!(out, "{} is present", edge)?;
    } else {
        writeln!(out, "{} is not present", edge)?;
    }
    Ok(())
}
