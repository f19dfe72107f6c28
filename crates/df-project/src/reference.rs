//! The reference distribution network.
//!
//! Two terminals supply four warehouses, which deliver to fourteen stores.
//! A super-source feeds the terminals and a super-sink drains the stores
//! through unbounded arcs.

use df_core::{Capacity, Tier};

use crate::schema::{EdgeDef, LATEST_VERSION, NodeDef, Topology};

pub const SOURCE: &str = "Source";
pub const SINK: &str = "Sink";

const TERMINALS: [&str; 2] = ["Terminal 1", "Terminal 2"];
const WAREHOUSES: [&str; 4] = ["Warehouse 1", "Warehouse 2", "Warehouse 3", "Warehouse 4"];
const STORE_COUNT: usize = 14;

const TERMINAL_TO_WAREHOUSE: [(&str, &str, i64); 6] = [
    ("Terminal 1", "Warehouse 1", 25),
    ("Terminal 1", "Warehouse 2", 20),
    ("Terminal 1", "Warehouse 3", 15),
    ("Terminal 2", "Warehouse 3", 15),
    ("Terminal 2", "Warehouse 4", 30),
    ("Terminal 2", "Warehouse 2", 10),
];

const WAREHOUSE_TO_STORE: [(&str, usize, i64); 14] = [
    ("Warehouse 1", 1, 15),
    ("Warehouse 1", 2, 10),
    ("Warehouse 1", 3, 20),
    ("Warehouse 2", 4, 15),
    ("Warehouse 2", 5, 10),
    ("Warehouse 2", 6, 25),
    ("Warehouse 3", 7, 20),
    ("Warehouse 3", 8, 15),
    ("Warehouse 3", 9, 10),
    ("Warehouse 4", 10, 20),
    ("Warehouse 4", 11, 10),
    ("Warehouse 4", 12, 15),
    ("Warehouse 4", 13, 5),
    ("Warehouse 4", 14, 10),
];

fn store(n: usize) -> String {
    format!("Store {}", n)
}

/// Build the reference topology.
pub fn distribution_network() -> Topology {
    let mut nodes = vec![NodeDef::new(SOURCE, Tier::Source)];
    nodes.extend(TERMINALS.iter().map(|t| NodeDef::new(*t, Tier::Terminal)));
    nodes.extend(WAREHOUSES.iter().map(|w| NodeDef::new(*w, Tier::Warehouse)));
    nodes.extend((1..=STORE_COUNT).map(|n| NodeDef::new(store(n), Tier::Store)));
    nodes.push(NodeDef::new(SINK, Tier::Sink));

    let mut edges: Vec<EdgeDef> = TERMINALS
        .iter()
        .map(|t| EdgeDef::new(SOURCE, *t, Capacity::Unbounded))
        .collect();
    edges.extend(
        TERMINAL_TO_WAREHOUSE
            .iter()
            .map(|&(t, w, cap)| EdgeDef::new(t, w, cap)),
    );
    edges.extend(
        WAREHOUSE_TO_STORE
            .iter()
            .map(|&(w, n, cap)| EdgeDef::new(w, store(n), cap)),
    );
    edges.extend((1..=STORE_COUNT).map(|n| EdgeDef::new(store(n), SINK, Capacity::Unbounded)));

    Topology {
        version: LATEST_VERSION,
        name: "Reference distribution network".to_string(),
        source: SOURCE.to_string(),
        sink: SINK.to_string(),
        nodes,
        edges,
    }
}
