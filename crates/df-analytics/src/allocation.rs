//! Proportional attribution of store deliveries to terminals.
//!
//! A max-flow assignment does not record which inbound unit at a warehouse
//! became which outbound unit. The table here assumes flow mixes uniformly at
//! each warehouse and re-splits it in proportion to each terminal's share of
//! the warehouse's inflow. It is a heuristic, not a provenance record.

use df_core::{Tier, Units, mul_div_round};
use df_graph::FlowGraph;
use serde::Serialize;
use tracing::debug;

use crate::flows::{TierFlows, TierLink};

/// Flow attributed from one terminal to one store via one warehouse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AllocationRow {
    pub terminal: String,
    pub warehouse: String,
    pub store: String,
    pub attributed_flow: Units,
}

/// Build the allocation table.
///
/// For every Warehouse -> Store link with positive flow and every terminal
/// with positive flow into that warehouse:
///
/// `attributed = round(link_flow * terminal_inflow / warehouse_inflow)`
///
/// computed in integers with halves rounded up. Rows attributed to one link
/// may therefore sum to one more or less than the link's flow. A row whose
/// attributed flow does not fit in `Units` is skipped and logged.
///
/// Rows are ordered by warehouse, then store link, then terminal, each in
/// registration order.
pub fn allocation_table(graph: &FlowGraph, tiers: &TierFlows) -> Vec<AllocationRow> {
    let mut rows = Vec::new();

    for warehouse in graph.nodes_with_tier(Tier::Warehouse) {
        let total = tiers.warehouse_inflow(warehouse.id);
        if total <= 0 {
            continue;
        }

        let mut suppliers: Vec<&TierLink> = tiers
            .terminal_to_warehouse
            .iter()
            .filter(|link| link.head == warehouse.id && link.flow > 0)
            .collect();
        suppliers.sort_by_key(|link| link.tail);

        let deliveries = tiers
            .warehouse_to_store
            .iter()
            .filter(|link| link.tail == warehouse.id && link.flow > 0);

        for delivery in deliveries {
            for supplier in &suppliers {
                let Some(attributed) = mul_div_round(delivery.flow, supplier.flow, total) else {
                    debug!(
                        terminal = graph.name(supplier.tail),
                        warehouse = %warehouse.name,
                        store = graph.name(delivery.head),
                        "attributed flow out of range, row skipped"
                    );
                    continue;
                };
                rows.push(AllocationRow {
                    terminal: graph.name(supplier.tail).to_string(),
                    warehouse: warehouse.name.clone(),
                    store: graph.name(delivery.head).to_string(),
                    attributed_flow: attributed,
                });
            }
        }
    }

    rows
}
