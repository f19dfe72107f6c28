//! Shortest augmenting path search.

use std::collections::VecDeque;

use df_core::{Capacity, EdgeId, NodeId};
use df_graph::FlowGraph;

/// A source-to-sink path of edges with positive residual capacity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AugmentingPath {
    /// Edges in source-to-sink order.
    pub edges: Vec<EdgeId>,
    /// Smallest residual capacity along the path.
    pub bottleneck: Capacity,
}

impl AugmentingPath {
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Node names along the path, joined with arrows.
    pub fn describe(&self, graph: &FlowGraph) -> String {
        let mut names = Vec::with_capacity(self.edges.len() + 1);
        for (i, id) in self.edges.iter().enumerate() {
            let edge = &graph.edges()[id.slot()];
            if i == 0 {
                names.push(graph.name(edge.from));
            }
            names.push(graph.name(edge.to));
        }
        names.join(" -> ")
    }
}

/// Breadth-first search for a shortest augmenting path (by edge count).
///
/// Nodes are visited in FIFO order and marked when enqueued; edges are tried
/// in adjacency insertion order, so ties resolve the same way every run. The
/// search stops the moment `sink` is discovered. Returns `None` when `sink`
/// is unreachable or equal to `source`.
pub fn shortest_augmenting_path(
    graph: &FlowGraph,
    source: NodeId,
    sink: NodeId,
) -> Option<AugmentingPath> {
    if source == sink {
        return None;
    }

    let n = graph.node_count();
    let mut parent: Vec<Option<EdgeId>> = vec![None; n];
    let mut visited = vec![false; n];
    let mut queue = VecDeque::new();

    visited[source.slot()] = true;
    queue.push_back(source);

    while let Some(u) = queue.pop_front() {
        for edge in graph.outgoing(u) {
            let v = edge.to;
            if visited[v.slot()] || !edge.residual_capacity().is_positive() {
                continue;
            }
            visited[v.slot()] = true;
            parent[v.slot()] = Some(edge.id);
            if v == sink {
                return Some(trace_back(graph, &parent, source, sink));
            }
            queue.push_back(v);
        }
    }

    None
}

fn trace_back(
    graph: &FlowGraph,
    parent: &[Option<EdgeId>],
    source: NodeId,
    sink: NodeId,
) -> AugmentingPath {
    let mut edges = Vec::new();
    let mut bottleneck = Capacity::Unbounded;
    let mut v = sink;
    while v != source {
        let Some(id) = parent[v.slot()] else {
            unreachable!("visited node without a parent edge");
        };
        let edge = &graph.edges()[id.slot()];
        bottleneck = bottleneck.min(edge.residual_capacity());
        edges.push(id);
        v = edge.from;
    }
    edges.reverse();
    AugmentingPath { edges, bottleneck }
}
