//! Basic build -> query -> traverse flow.

use adjgraph::*;

fn main() -> GraphResult<()> {
    // Two components: {0, 1, 2} and {3, 4}, plus the isolated node 5
    let mut builder = GraphBuilder::new(6);
    builder.link(0, 1).link(1, 2).link(3, 4).link_weighted(4, 4, 2);
    let mut graph = builder.build()?;

    println!(
        "Graph created with {} nodes and {} edges",
        graph.node_count(),
        graph.edge_count()
    );

    println!("(2,1) present: {}", graph.present(&Edge::new(2, 1)));

    let order: Vec<usize> = graph.breadth_first_search(3)?.collect();
    println!("BFS from 3: {:?}", order);

    graph.delete_edge(Edge::new(1, 2))?;
    for (i, component) in graph.connected_components().iter().enumerate() {
        println!("Component {}: {:?}", i, component);
    }

    println!("\n{}", graph);
    Ok(())
}
