//! High-level solver interface.

use df_core::{Capacity, Units};
use df_graph::{FlowGraph, NodeRef, validate};
use tracing::{debug, trace};

use crate::error::{SolverError, SolverResult};
use crate::path::shortest_augmenting_path;

/// Solver configuration.
#[derive(Debug, Clone, Default)]
pub struct SolveConfig {
    /// Stop with `SolverError::IterationLimit` after this many augmentations.
    ///
    /// Edmonds-Karp terminates after O(V * E) augmentations on its own; the
    /// limit only guards against pathological inputs.
    pub max_augmentations: Option<usize>,
}

/// Outcome of a successful solve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveSummary {
    /// Value of the maximum flow.
    pub value: Units,
    /// Number of augmenting paths applied.
    pub augmentations: usize,
    /// Edge count of each augmenting path, in the order they were applied.
    /// Never decreases.
    pub path_lengths: Vec<usize>,
}

/// Compute the maximum flow from `source` to `sink`.
///
/// Mutates `graph` in place so that on return its edge flows form one valid
/// maximum-flow assignment. See `max_flow_with` for the error cases.
pub fn max_flow(
    graph: &mut FlowGraph,
    source: impl NodeRef,
    sink: impl NodeRef,
) -> SolverResult<Units> {
    max_flow_with(graph, source, sink, &SolveConfig::default()).map(|s| s.value)
}

/// Compute the maximum flow with an explicit configuration.
///
/// This function:
/// 1. Resolves `source` and `sink` before touching any flow
/// 2. Returns 0 without mutation when they are the same node
/// 3. Repeatedly augments along a shortest path with positive residual
///    capacity until none remains
///
/// Flow already present in the graph is kept: solving a converged graph again
/// adds nothing. Use `FlowGraph::reset_flows` to start over.
///
/// # Errors
/// * `UnknownNode` if `source` or `sink` is not registered (nothing mutated)
/// * `UnboundedFlow` if a path consists only of unbounded edges
/// * `IterationLimit` if `config.max_augmentations` is exceeded; flows from
///   the augmentations already applied remain in the graph
/// * `Overflow` if the next augmentation would push the total or an edge's
///   flow past `i64::MAX`; that augmentation is not applied
pub fn max_flow_with(
    graph: &mut FlowGraph,
    source: impl NodeRef,
    sink: impl NodeRef,
    config: &SolveConfig,
) -> SolverResult<SolveSummary> {
    let source = source.resolve(graph)?;
    let sink = sink.resolve(graph)?;

    let mut summary = SolveSummary {
        value: 0,
        augmentations: 0,
        path_lengths: Vec::new(),
    };

    if source == sink {
        debug!(node = graph.name(source), "source equals sink, nothing to solve");
        return Ok(summary);
    }

    while let Some(path) = shortest_augmenting_path(graph, source, sink) {
        if let Some(limit) = config.max_augmentations {
            if summary.augmentations >= limit {
                return Err(SolverError::IterationLimit { limit });
            }
        }

        let amount = match path.bottleneck {
            Capacity::Finite(units) => units,
            Capacity::Unbounded => {
                return Err(SolverError::UnboundedFlow {
                    path: path.describe(graph),
                });
            }
        };

        // An overflowing path is refused before any edge moves.
        let total = summary.value.checked_add(amount);
        let fits = path
            .edges
            .iter()
            .all(|&id| graph.edges()[id.slot()].flow.checked_add(amount).is_some());
        let Some(total) = total.filter(|_| fits) else {
            return Err(SolverError::Overflow {
                augmentations: summary.augmentations,
            });
        };

        for &edge in &path.edges {
            graph.augment(edge, amount);
        }

        summary.value = total;
        summary.augmentations += 1;
        summary.path_lengths.push(path.len());

        trace!(
            augmentation = summary.augmentations,
            amount,
            length = path.len(),
            total = summary.value,
            "augmented"
        );
    }

    debug_assert!(validate::check_all(graph, source, sink).is_ok());

    debug!(
        source = graph.name(source),
        sink = graph.name(sink),
        value = summary.value,
        augmentations = summary.augmentations,
        "max flow converged"
    );

    Ok(summary)
}
