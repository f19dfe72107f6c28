//! Graph-specific error types.

use df_core::{NodeId, Tier, Units};

pub type GraphResult<T> = Result<T, GraphError>;

/// Graph construction and invariant errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// No node is registered under this name.
    UnknownNode { name: String },

    /// A node handle does not belong to this graph.
    UnknownNodeId { id: NodeId },

    /// An edge was requested with a negative capacity.
    InvalidCapacity {
        from: String,
        to: String,
        capacity: Units,
    },

    /// A node was registered again with a different tier.
    TierConflict {
        name: String,
        existing: Tier,
        requested: Tier,
    },

    /// A flow invariant does not hold.
    InvariantViolated { what: String },
}

impl std::fmt::Display for GraphError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GraphError::UnknownNode { name } => {
                write!(f, "Unknown node '{}'", name)
            }
            GraphError::UnknownNodeId { id } => {
                write!(f, "Node id {} is not registered in this graph", id)
            }
            GraphError::InvalidCapacity { from, to, capacity } => {
                write!(
                    f,
                    "Edge '{}' -> '{}' has negative capacity {}",
                    from, to, capacity
                )
            }
            GraphError::TierConflict {
                name,
                existing,
                requested,
            } => {
                write!(
                    f,
                    "Node '{}' is already registered as {} (requested {})",
                    name, existing, requested
                )
            }
            GraphError::InvariantViolated { what } => {
                write!(f, "Flow invariant violated: {}", what)
            }
        }
    }
}

impl std::error::Error for GraphError {}
