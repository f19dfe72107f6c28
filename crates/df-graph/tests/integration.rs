//! Integration tests for df-graph.

use df_core::{Capacity, Tier};
use df_graph::{EdgeKind, FlowGraph, GraphError, NodeRef, validate};

#[test]
fn build_tiered_chain() {
    // Source -> Terminal -> Warehouse -> Store -> Sink
    let mut graph = FlowGraph::new();
    let s = graph.add_node("Source", Tier::Source).unwrap();
    let t = graph.add_node("Terminal 1", Tier::Terminal).unwrap();
    let w = graph.add_node("Warehouse 1", Tier::Warehouse).unwrap();
    let m = graph.add_node("Store 1", Tier::Store).unwrap();
    let k = graph.add_node("Sink", Tier::Sink).unwrap();

    graph.add_edge("Source", "Terminal 1", Capacity::Unbounded).unwrap();
    graph.add_edge("Terminal 1", "Warehouse 1", 25).unwrap();
    graph.add_edge("Warehouse 1", "Store 1", 15).unwrap();
    graph.add_edge("Store 1", "Sink", Capacity::Unbounded).unwrap();

    assert_eq!(graph.node_count(), 5);
    assert_eq!(graph.edge_count(), 4);
    assert_eq!(graph.edges().len(), 8);

    // Interior nodes hold one residual (incoming) and one forward (outgoing) edge.
    let kinds: Vec<EdgeKind> = graph.outgoing(w).map(|e| e.kind).collect();
    assert_eq!(kinds, vec![EdgeKind::Residual, EdgeKind::Forward]);

    assert_eq!(graph.outgoing(s).count(), 1);
    assert_eq!(graph.outgoing(k).count(), 1);
    assert!(graph.outgoing(k).all(|e| e.is_residual()));

    let stores: Vec<_> = graph.nodes_with_tier(Tier::Store).map(|n| n.id).collect();
    assert_eq!(stores, vec![m]);
    assert_eq!(graph.tier(t), Some(Tier::Terminal));

    assert!(validate::check_all(&graph, s, k).is_ok());
}

#[test]
fn adjacency_order_is_insertion_order() {
    let mut graph = FlowGraph::new();
    let e1 = graph.add_edge("A", "C", 1).unwrap();
    let e2 = graph.add_edge("A", "B", 1).unwrap();
    let e3 = graph.add_edge("A", "D", 1).unwrap();
    let a = "A".resolve(&graph).unwrap();
    assert_eq!(graph.outgoing_edges(a), &[e1, e2, e3]);

    let heads: Vec<&str> = graph.outgoing(a).map(|e| graph.name(e.to)).collect();
    assert_eq!(heads, vec!["C", "B", "D"]);
}

#[test]
fn real_edges_skip_residuals() {
    let mut graph = FlowGraph::new();
    graph.add_edge("A", "B", 2).unwrap();
    graph.add_edge("B", "A", 3).unwrap();
    let caps: Vec<Capacity> = graph.real_edges().map(|e| e.capacity).collect();
    assert_eq!(caps, vec![Capacity::Finite(2), Capacity::Finite(3)]);
}

#[test]
fn errors_render_names() {
    let mut graph = FlowGraph::new();
    let err = graph.add_edge("Terminal 1", "Warehouse 9", -1).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Edge 'Terminal 1' -> 'Warehouse 9' has negative capacity -1"
    );

    let err = "Nowhere".resolve(&graph).unwrap_err();
    assert_eq!(
        err,
        GraphError::UnknownNode {
            name: "Nowhere".into()
        }
    );
}
