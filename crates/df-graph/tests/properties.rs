//! Random augment sequences against the edge-pair invariants.

use df_core::{Capacity, EdgeId};
use df_graph::{FlowGraph, validate};
use proptest::prelude::*;

fn ring(capacities: &[i64]) -> FlowGraph {
    let mut graph = FlowGraph::new();
    let n = capacities.len();
    for (i, &cap) in capacities.iter().enumerate() {
        graph
            .add_edge(&format!("n{i}"), &format!("n{}", (i + 1) % n), cap)
            .unwrap();
    }
    graph
}

proptest! {
    #[test]
    fn bounded_augments_keep_pairs_consistent(
        capacities in prop::collection::vec(0i64..50, 2..8),
        steps in prop::collection::vec((0usize..16, 1i64..60), 0..40),
    ) {
        let mut graph = ring(&capacities);
        let slots = graph.edges().len();

        for (slot, requested) in steps {
            // Both halves of each pair are candidates; residual edges undo flow.
            let id = EdgeId::from_index((slot % slots) as u32);
            let room = match graph.residual_capacity(id) {
                Capacity::Finite(units) => units,
                Capacity::Unbounded => requested,
            };
            let amount = requested.min(room);
            if amount > 0 {
                graph.augment(id, amount);
            }
        }

        prop_assert!(validate::check_skew_symmetry(&graph).is_ok());
        prop_assert!(validate::check_capacity_bounds(&graph).is_ok());
        for edge in graph.real_edges() {
            prop_assert!(edge.residual_capacity() >= Capacity::Finite(0));
            prop_assert_eq!(graph.residual_capacity(edge.pair()), Capacity::Finite(edge.flow));
        }
    }

    #[test]
    fn reset_restores_unsolved_state(
        capacities in prop::collection::vec(1i64..50, 2..8),
        fill in 0usize..8,
    ) {
        let mut graph = ring(&capacities);
        let forward: Vec<EdgeId> = graph.real_edges().map(|e| e.id).take(fill).collect();
        for id in forward {
            let room = graph.residual_capacity(id).units().unwrap_or(0);
            graph.augment(id, room);
        }

        graph.reset_flows();
        prop_assert!(graph.edges().iter().all(|e| e.flow == 0));
        prop_assert!(validate::check_skew_symmetry(&graph).is_ok());
    }
}
