//! Edge flow extraction and tier grouping.

use std::collections::HashMap;

use df_core::{Capacity, NodeId, Tier, Units};
use df_graph::{Edge, FlowGraph};
use serde::Serialize;

/// Flow on one real edge, by node name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EdgeFlow {
    pub from: String,
    pub to: String,
    pub flow: Units,
    pub capacity: Capacity,
}

impl EdgeFlow {
    pub fn from_edge(graph: &FlowGraph, edge: &Edge) -> Self {
        Self {
            from: graph.name(edge.from).to_string(),
            to: graph.name(edge.to).to_string(),
            flow: edge.flow,
            capacity: edge.capacity,
        }
    }
}

/// Flow on every real edge, in insertion order.
pub fn edge_flows(graph: &FlowGraph) -> Vec<EdgeFlow> {
    graph
        .real_edges()
        .map(|edge| EdgeFlow::from_edge(graph, edge))
        .collect()
}

/// A per-node aggregate, by node name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeTotal {
    pub node: String,
    pub total: Units,
}

/// Total flow from one tagged node to another.
///
/// Parallel edges between the same two nodes are summed into one link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierLink {
    pub tail: NodeId,
    pub head: NodeId,
    pub flow: Units,
}

/// Flows grouped by the tiers of interest.
///
/// Grouping uses the tier tags set at registration; node names are never
/// inspected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TierFlows {
    pub terminal_to_warehouse: Vec<TierLink>,
    pub warehouse_to_store: Vec<TierLink>,
}

impl TierFlows {
    pub fn collect(graph: &FlowGraph) -> Self {
        Self {
            terminal_to_warehouse: Self::links(graph, Tier::Terminal, Tier::Warehouse),
            warehouse_to_store: Self::links(graph, Tier::Warehouse, Tier::Store),
        }
    }

    /// Links from `tail_tier` nodes to `head_tier` nodes, in order of each
    /// pair's first edge.
    pub fn links(graph: &FlowGraph, tail_tier: Tier, head_tier: Tier) -> Vec<TierLink> {
        let mut links: Vec<TierLink> = Vec::new();
        let mut slot: HashMap<(NodeId, NodeId), usize> = HashMap::new();

        for edge in graph.real_edges() {
            if graph.tier(edge.from) != Some(tail_tier) || graph.tier(edge.to) != Some(head_tier) {
                continue;
            }
            match slot.get(&(edge.from, edge.to)) {
                Some(&i) => links[i].flow += edge.flow,
                None => {
                    slot.insert((edge.from, edge.to), links.len());
                    links.push(TierLink {
                        tail: edge.from,
                        head: edge.to,
                        flow: edge.flow,
                    });
                }
            }
        }
        links
    }

    /// Total Terminal -> Warehouse flow into `warehouse`.
    pub fn warehouse_inflow(&self, warehouse: NodeId) -> Units {
        self.terminal_to_warehouse
            .iter()
            .filter(|link| link.head == warehouse)
            .map(|link| link.flow)
            .sum()
    }

    /// Total Terminal -> Warehouse flow out of `terminal`.
    pub fn terminal_outflow(&self, terminal: NodeId) -> Units {
        self.terminal_to_warehouse
            .iter()
            .filter(|link| link.tail == terminal)
            .map(|link| link.flow)
            .sum()
    }

    /// Inflow of every Warehouse-tier node, in registration order.
    pub fn tiered_inflow(&self, graph: &FlowGraph) -> Vec<NodeTotal> {
        graph
            .nodes_with_tier(Tier::Warehouse)
            .map(|w| NodeTotal {
                node: w.name.clone(),
                total: self.warehouse_inflow(w.id),
            })
            .collect()
    }
}
