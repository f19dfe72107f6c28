//! Topology -> FlowGraph.

use df_graph::FlowGraph;

use crate::ProjectResult;
use crate::schema::Topology;
use crate::validate::validate_topology;

/// Validate `topology` and build its flow graph.
///
/// Nodes are registered in file order with their tiers before any edge is
/// added, so every endpoint carries a tag.
pub fn build_graph(topology: &Topology) -> ProjectResult<FlowGraph> {
    validate_topology(topology)?;

    let mut graph = FlowGraph::new();
    for node in &topology.nodes {
        graph.add_node(node.id.as_str(), node.tier)?;
    }
    for edge in &topology.edges {
        graph.add_edge(&edge.from, &edge.to, edge.capacity)?;
    }
    Ok(graph)
}
