//! Minimum cut read from a solved residual graph.

use std::collections::VecDeque;

use df_core::{Capacity, EdgeId, NodeId};
use df_graph::{FlowGraph, NodeRef};

use crate::error::SolverResult;

/// Source/sink partition of a network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinCut {
    /// Nodes reachable from the source through positive residual capacity,
    /// in discovery order.
    pub source_side: Vec<NodeId>,
    /// Real edges leaving the source side, in insertion order.
    pub cut_edges: Vec<EdgeId>,
    /// Sum of the cut edges' capacities.
    pub capacity: Capacity,
}

impl MinCut {
    pub fn contains(&self, node: NodeId) -> bool {
        self.source_side.contains(&node)
    }
}

/// Partition `graph` by residual reachability from `source`.
///
/// On a graph solved by `max_flow` this is a minimum cut: every cut edge is
/// saturated and `capacity` equals the max-flow value. On an unsolved graph
/// it is simply the cut around everything reachable from `source`.
pub fn min_cut(graph: &FlowGraph, source: impl NodeRef) -> SolverResult<MinCut> {
    let source = source.resolve(graph)?;

    let mut reachable = vec![false; graph.node_count()];
    let mut source_side = vec![source];
    let mut queue = VecDeque::from([source]);
    reachable[source.slot()] = true;

    while let Some(u) = queue.pop_front() {
        for edge in graph.outgoing(u) {
            if !reachable[edge.to.slot()] && edge.residual_capacity().is_positive() {
                reachable[edge.to.slot()] = true;
                source_side.push(edge.to);
                queue.push_back(edge.to);
            }
        }
    }

    let mut cut_edges = Vec::new();
    let mut capacity = Capacity::Finite(0);
    for edge in graph.real_edges() {
        if reachable[edge.from.slot()] && !reachable[edge.to.slot()] {
            cut_edges.push(edge.id);
            capacity = capacity + edge.capacity;
        }
    }

    Ok(MinCut {
        source_side,
        cut_edges,
        capacity,
    })
}
