//! Error types for solver operations.

use df_graph::GraphError;
use thiserror::Error;

/// Errors that can occur while solving a network.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    #[error("Unknown node: {name}")]
    UnknownNode { name: String },

    #[error("Unbounded flow: augmenting path {path} has no finite capacity")]
    UnboundedFlow { path: String },

    #[error("Augmentation limit of {limit} reached before convergence")]
    IterationLimit { limit: usize },

    #[error("Flow value overflowed after {augmentations} augmentations")]
    Overflow { augmentations: usize },

    #[error("Graph error: {0}")]
    Graph(GraphError),
}

pub type SolverResult<T> = Result<T, SolverError>;

impl From<GraphError> for SolverError {
    fn from(err: GraphError) -> Self {
        match err {
            GraphError::UnknownNode { name } => SolverError::UnknownNode { name },
            GraphError::UnknownNodeId { id } => SolverError::UnknownNode {
                name: format!("#{}", id),
            },
            other => SolverError::Graph(other),
        }
    }
}
