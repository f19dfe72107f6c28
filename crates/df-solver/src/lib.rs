//! Maximum-flow solver for distribution networks.
//!
//! This crate provides Edmonds-Karp (shortest augmenting paths found by
//! breadth-first search) over a `df_graph::FlowGraph`. The solver mutates the
//! graph's edge flows in place; on return they form one valid maximum flow.
//! `min_cut` reads the residual graph of a solved network back out as a
//! source/sink partition.

pub mod cut;
pub mod error;
pub mod path;
pub mod solve;

pub use cut::{MinCut, min_cut};
pub use error::{SolverError, SolverResult};
pub use path::AugmentingPath;
pub use solve::{SolveConfig, SolveSummary, max_flow, max_flow_with};
