//! df-graph: flow network model for distflow.
//!
//! Provides:
//! - Core graph data structures (Node, Edge, FlowGraph)
//! - Paired forward/residual edges with skew-symmetric flow
//! - Name index for resolving node handles
//! - Invariant checks (capacity bound, skew symmetry, conservation)
//!
//! # Example
//!
//! ```
//! use df_core::{Capacity, Tier};
//! use df_graph::FlowGraph;
//!
//! let mut graph = FlowGraph::new();
//! graph.add_node("Terminal 1", Tier::Terminal).unwrap();
//! graph.add_node("Warehouse 1", Tier::Warehouse).unwrap();
//! let edge = graph.add_edge("Terminal 1", "Warehouse 1", 25).unwrap();
//!
//! assert_eq!(graph.node_count(), 2);
//! assert_eq!(graph.edge_count(), 1);
//! assert_eq!(graph.residual_capacity(edge), Capacity::Finite(25));
//! ```

pub mod error;
pub mod graph;
pub mod indexing;
pub mod validate;

// Re-exports for ergonomics
pub use error::{GraphError, GraphResult};
pub use graph::{Edge, EdgeKind, FlowGraph, Node};
pub use indexing::{NameIndex, NodeRef};
