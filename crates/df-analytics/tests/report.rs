//! End-to-end: solve a small tiered network and read the report.

use df_analytics::{AllocationRow, FlowReport, NodeTotal};
use df_core::{Capacity, Tier};
use df_graph::FlowGraph;
use df_solver::max_flow;

fn network() -> FlowGraph {
    let mut graph = FlowGraph::new();
    graph.add_node("Source", Tier::Source).unwrap();
    for t in ["T1", "T2"] {
        graph.add_node(t, Tier::Terminal).unwrap();
    }
    for w in ["W1", "W2"] {
        graph.add_node(w, Tier::Warehouse).unwrap();
    }
    for m in ["M1", "M2", "M3"] {
        graph.add_node(m, Tier::Store).unwrap();
    }
    graph.add_node("Sink", Tier::Sink).unwrap();

    graph.add_edge("Source", "T1", Capacity::Unbounded).unwrap();
    graph.add_edge("Source", "T2", Capacity::Unbounded).unwrap();
    graph.add_edge("T1", "W1", 10).unwrap();
    graph.add_edge("T2", "W1", 5).unwrap();
    graph.add_edge("T2", "W2", 8).unwrap();
    graph.add_edge("W1", "M1", 6).unwrap();
    graph.add_edge("W1", "M2", 20).unwrap();
    graph.add_edge("W2", "M3", 3).unwrap();
    for m in ["M1", "M2", "M3"] {
        graph.add_edge(m, "Sink", Capacity::Unbounded).unwrap();
    }
    graph
}

fn row(terminal: &str, warehouse: &str, store: &str, attributed_flow: i64) -> AllocationRow {
    AllocationRow {
        terminal: terminal.into(),
        warehouse: warehouse.into(),
        store: store.into(),
        attributed_flow,
    }
}

fn solved() -> FlowReport {
    let mut graph = network();
    let value = max_flow(&mut graph, "Source", "Sink").unwrap();
    FlowReport::build(&graph, value)
}

#[test]
fn max_flow_and_tier_inflow() {
    let report = solved();
    assert_eq!(report.max_flow_value, 18);
    assert_eq!(
        report.tiered_inflow,
        vec![
            NodeTotal {
                node: "W1".into(),
                total: 15
            },
            NodeTotal {
                node: "W2".into(),
                total: 3
            },
        ]
    );
    assert_eq!(report.edge_flows.len(), 11);
}

#[test]
fn allocation_follows_inflow_shares() {
    let report = solved();
    assert_eq!(
        report.allocation_table,
        vec![
            row("T1", "W1", "M1", 4),
            row("T2", "W1", "M1", 2),
            row("T1", "W1", "M2", 6),
            row("T2", "W1", "M2", 3),
            row("T2", "W2", "M3", 3),
        ]
    );
}

#[test]
fn extremal_reports() {
    let report = solved();
    let extremal = &report.extremal;

    let busiest = extremal.busiest_terminal.as_ref().unwrap();
    assert_eq!((busiest.node.as_str(), busiest.total), ("T1", 10));

    let min = extremal.min_capacity_edges.as_ref().unwrap();
    assert_eq!(min.capacity, 3);
    assert_eq!(min.edges.len(), 1);
    assert_eq!((min.edges[0].from.as_str(), min.edges[0].to.as_str()), ("W2", "M3"));

    let starved = extremal.most_starved_stores.as_ref().unwrap();
    assert_eq!(starved.allocation, 3);
    assert_eq!(starved.stores, vec!["M3".to_string()]);

    let saturated: Vec<(&str, &str)> = extremal
        .saturated_edges
        .iter()
        .map(|e| (e.from.as_str(), e.to.as_str()))
        .collect();
    assert_eq!(
        saturated,
        vec![("T1", "W1"), ("T2", "W1"), ("W1", "M1"), ("W2", "M3")]
    );
}

#[test]
fn unsolved_graph_gives_zero_report() {
    let graph = network();
    let report = FlowReport::build(&graph, 0);

    assert_eq!(report.max_flow_value, 0);
    assert!(report.edge_flows.iter().all(|e| e.flow == 0));
    assert!(report.tiered_inflow.iter().all(|t| t.total == 0));
    assert!(report.allocation_table.is_empty());
    assert!(report.extremal.saturated_edges.is_empty());

    // Every store ties at zero.
    let starved = report.extremal.most_starved_stores.unwrap();
    assert_eq!(starved.allocation, 0);
    assert_eq!(starved.stores.len(), 3);
}

#[test]
fn report_serializes_to_json() {
    let report = solved();
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["max_flow_value"], 18);
    assert_eq!(json["edge_flows"][0]["capacity"], "unbounded");
    assert_eq!(json["edge_flows"][2]["capacity"]["finite"], 10);
    assert_eq!(json["extremal"]["busiest_terminal"]["node"], "T1");
}
