//! Extremal reports over the final flow state.

use std::collections::HashMap;

use df_core::{Tier, Units};
use df_graph::FlowGraph;
use serde::Serialize;

use crate::allocation::AllocationRow;
use crate::flows::{EdgeFlow, NodeTotal, TierFlows};

/// Real edges sharing the smallest strictly positive finite capacity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MinCapacityEdges {
    pub capacity: Units,
    pub edges: Vec<EdgeFlow>,
}

/// Stores sharing the smallest total attributed allocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StarvedStores {
    pub allocation: Units,
    pub stores: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtremalReport {
    pub busiest_terminal: Option<NodeTotal>,
    pub min_capacity_edges: Option<MinCapacityEdges>,
    pub most_starved_stores: Option<StarvedStores>,
    /// Bottlenecks: edges running at full capacity.
    pub saturated_edges: Vec<EdgeFlow>,
}

impl ExtremalReport {
    pub fn compute(graph: &FlowGraph, tiers: &TierFlows, allocation: &[AllocationRow]) -> Self {
        Self {
            busiest_terminal: busiest_terminal(graph, tiers),
            min_capacity_edges: min_capacity_edges(graph),
            most_starved_stores: most_starved_stores(graph, allocation),
            saturated_edges: saturated_edges(graph),
        }
    }
}

/// Terminal with the largest Terminal -> Warehouse outflow.
///
/// Ties go to the terminal registered first.
pub fn busiest_terminal(graph: &FlowGraph, tiers: &TierFlows) -> Option<NodeTotal> {
    let mut best: Option<NodeTotal> = None;
    for terminal in graph.nodes_with_tier(Tier::Terminal) {
        let total = tiers.terminal_outflow(terminal.id);
        if best.as_ref().is_none_or(|b| total > b.total) {
            best = Some(NodeTotal {
                node: terminal.name.clone(),
                total,
            });
        }
    }
    best
}

/// Every real edge at the smallest strictly positive finite capacity.
pub fn min_capacity_edges(graph: &FlowGraph) -> Option<MinCapacityEdges> {
    let capacity = graph
        .real_edges()
        .filter_map(|e| e.capacity.units())
        .filter(|&c| c > 0)
        .min()?;
    let edges = graph
        .real_edges()
        .filter(|e| e.capacity.units() == Some(capacity))
        .map(|e| EdgeFlow::from_edge(graph, e))
        .collect();
    Some(MinCapacityEdges { capacity, edges })
}

/// Total attributed allocation of every Store-tier node, in registration
/// order. Stores without allocation rows count as 0.
pub fn store_allocations(graph: &FlowGraph, allocation: &[AllocationRow]) -> Vec<NodeTotal> {
    let mut by_store: HashMap<&str, Units> = HashMap::new();
    for row in allocation {
        *by_store.entry(row.store.as_str()).or_insert(0) += row.attributed_flow;
    }
    graph
        .nodes_with_tier(Tier::Store)
        .map(|store| NodeTotal {
            node: store.name.clone(),
            total: by_store.get(store.name.as_str()).copied().unwrap_or(0),
        })
        .collect()
}

/// Stores whose total attributed allocation is minimal; all ties reported.
pub fn most_starved_stores(graph: &FlowGraph, allocation: &[AllocationRow]) -> Option<StarvedStores> {
    let totals = store_allocations(graph, allocation);
    let min = totals.iter().map(|t| t.total).min()?;
    let stores = totals
        .into_iter()
        .filter(|t| t.total == min)
        .map(|t| t.node)
        .collect();
    Some(StarvedStores {
        allocation: min,
        stores,
    })
}

/// Real edges with `flow == capacity` and `capacity > 0`.
pub fn saturated_edges(graph: &FlowGraph) -> Vec<EdgeFlow> {
    graph
        .real_edges()
        .filter(|e| e.capacity.is_saturated_by(e.flow))
        .map(|e| EdgeFlow::from_edge(graph, e))
        .collect()
}
