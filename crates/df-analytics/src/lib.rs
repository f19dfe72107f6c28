//! Flow extraction and analytics over a solved network.
//!
//! Everything here reads a `FlowGraph` without mutating it. A graph that was
//! never solved is not an error; it yields a zero-valued report.
//!
//! - `flows`: per-edge flows and tier-to-tier grouping
//! - `allocation`: proportional attribution of store deliveries to terminals
//! - `extremal`: busiest terminal, scarcest edges, starved stores, bottlenecks
//! - `report`: the assembled `FlowReport`

pub mod allocation;
pub mod extremal;
pub mod flows;
pub mod report;

pub use allocation::{AllocationRow, allocation_table};
pub use extremal::{ExtremalReport, MinCapacityEdges, StarvedStores};
pub use flows::{EdgeFlow, NodeTotal, TierFlows, TierLink, edge_flows};
pub use report::FlowReport;
