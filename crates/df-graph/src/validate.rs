//! Flow invariant checks.
//!
//! These hold after every completed augmentation; they are not expected to
//! hold mid-augmentation.

use df_core::{Capacity, NodeId, Units};

use crate::error::{GraphError, GraphResult};
use crate::graph::FlowGraph;

/// Every real edge satisfies `0 <= flow <= capacity`.
pub fn check_capacity_bounds(graph: &FlowGraph) -> GraphResult<()> {
    for edge in graph.real_edges() {
        let over = match edge.capacity {
            Capacity::Finite(cap) => edge.flow > cap,
            Capacity::Unbounded => false,
        };
        if edge.flow < 0 || over {
            return Err(GraphError::InvariantViolated {
                what: format!(
                    "edge '{}' -> '{}' carries {} of capacity {}",
                    graph.name(edge.from),
                    graph.name(edge.to),
                    edge.flow,
                    edge.capacity
                ),
            });
        }
    }
    Ok(())
}

/// Every edge's flow is the negation of its pair's flow.
pub fn check_skew_symmetry(graph: &FlowGraph) -> GraphResult<()> {
    for edge in graph.real_edges() {
        let pair_flow = graph.edges()[edge.pair().slot()].flow;
        if edge.flow != -pair_flow {
            return Err(GraphError::InvariantViolated {
                what: format!(
                    "edge '{}' -> '{}' has flow {} but its residual has {}",
                    graph.name(edge.from),
                    graph.name(edge.to),
                    edge.flow,
                    pair_flow
                ),
            });
        }
    }
    Ok(())
}

/// Real-edge inflow equals outflow at every node except `source` and `sink`.
pub fn check_conservation(graph: &FlowGraph, source: NodeId, sink: NodeId) -> GraphResult<()> {
    let mut balance: Vec<Units> = vec![0; graph.node_count()];
    for edge in graph.real_edges() {
        balance[edge.from.slot()] -= edge.flow;
        balance[edge.to.slot()] += edge.flow;
    }

    for node in graph.nodes() {
        if node.id == source || node.id == sink {
            continue;
        }
        let net = balance[node.id.slot()];
        if net != 0 {
            return Err(GraphError::InvariantViolated {
                what: format!("node '{}' has net inflow {}", node.name, net),
            });
        }
    }
    Ok(())
}

/// All three checks.
pub fn check_all(graph: &FlowGraph, source: NodeId, sink: NodeId) -> GraphResult<()> {
    check_capacity_bounds(graph)?;
    check_skew_symmetry(graph)?;
    check_conservation(graph, source, sink)
}
