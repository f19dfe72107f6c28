//! The assembled result structure.

use df_core::Units;
use df_graph::FlowGraph;
use serde::Serialize;
use tracing::debug;

use crate::allocation::{AllocationRow, allocation_table};
use crate::extremal::ExtremalReport;
use crate::flows::{EdgeFlow, NodeTotal, TierFlows, edge_flows};

/// Everything derived from one solved network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlowReport {
    pub max_flow_value: Units,
    pub edge_flows: Vec<EdgeFlow>,
    /// Terminal -> Warehouse inflow of every warehouse.
    pub tiered_inflow: Vec<NodeTotal>,
    /// Heuristic terminal -> store attribution; see `allocation`.
    pub allocation_table: Vec<AllocationRow>,
    pub extremal: ExtremalReport,
}

impl FlowReport {
    /// Read a report out of `graph`, solved to `max_flow_value`.
    pub fn build(graph: &FlowGraph, max_flow_value: Units) -> Self {
        if graph.real_edges().all(|e| e.flow == 0) {
            debug!("building report from a graph that carries no flow");
        }

        let tiers = TierFlows::collect(graph);
        let allocation = allocation_table(graph, &tiers);
        let extremal = ExtremalReport::compute(graph, &tiers, &allocation);

        debug!(
            max_flow_value,
            edges = graph.edge_count(),
            allocation_rows = allocation.len(),
            saturated = extremal.saturated_edges.len(),
            "flow report built"
        );

        Self {
            max_flow_value,
            edge_flows: edge_flows(graph),
            tiered_inflow: tiers.tiered_inflow(graph),
            allocation_table: allocation,
            extremal,
        }
    }
}
