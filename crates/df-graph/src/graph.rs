//! Core graph data structures.

use df_core::{Capacity, EdgeId, NodeId, Tier, Units, ensure_non_negative};

use crate::error::{GraphError, GraphResult};
use crate::indexing::NameIndex;

/// Which half of an edge pair an edge is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeKind {
    /// Real edge from the topology.
    Forward,
    /// Reverse edge that lets a later augmentation undo pushed flow.
    Residual,
}

/// A node in the flow network.
///
/// Nodes hold no flow state; the graph owns the adjacency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub id: NodeId,
    pub name: String,
    /// `None` when the node was only registered implicitly by `add_edge`.
    pub tier: Option<Tier>,
}

/// A directed edge carrying flow.
///
/// Every forward edge is paired with a residual edge in the opposite
/// direction. Pairs occupy adjacent slots: forward at `2k`, residual at
/// `2k + 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub id: EdgeId,
    pub from: NodeId,
    pub to: NodeId,
    pub capacity: Capacity,
    pub flow: Units,
    pub kind: EdgeKind,
}

impl Edge {
    /// `capacity - flow`.
    pub fn residual_capacity(&self) -> Capacity {
        self.capacity.residual(self.flow)
    }

    /// ID of the other half of this edge's pair.
    pub fn pair(&self) -> EdgeId {
        pair_of(self.id)
    }

    pub fn is_residual(&self) -> bool {
        self.kind == EdgeKind::Residual
    }
}

fn pair_of(id: EdgeId) -> EdgeId {
    EdgeId::from_index(id.index() ^ 1)
}

/// Directed multigraph with paired forward/residual edges.
///
/// Nodes and edges live in arenas indexed by their IDs; each node keeps its
/// outgoing edges (real and residual) in insertion order. Nothing is ever
/// removed. After construction the only mutation is `augment`.
#[derive(Debug, Clone, Default)]
pub struct FlowGraph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    adjacency: Vec<Vec<EdgeId>>,
    index: NameIndex,
}

impl FlowGraph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a node with its tier.
    ///
    /// Idempotent: registering the same name with the same tier returns the
    /// existing ID. A node first seen through `add_edge` takes the tier given
    /// here. Re-registering with a different tier is an error and leaves the
    /// graph unchanged.
    pub fn add_node(&mut self, name: impl Into<String>, tier: Tier) -> GraphResult<NodeId> {
        let name = name.into();
        if let Some(id) = self.index.get(&name) {
            let node = &mut self.nodes[id.slot()];
            return match node.tier {
                None => {
                    node.tier = Some(tier);
                    Ok(id)
                }
                Some(existing) if existing == tier => Ok(id),
                Some(existing) => Err(GraphError::TierConflict {
                    name,
                    existing,
                    requested: tier,
                }),
            };
        }
        Ok(self.insert_node(name, Some(tier)))
    }

    fn ensure_node(&mut self, name: &str) -> NodeId {
        match self.index.get(name) {
            Some(id) => id,
            None => self.insert_node(name.to_string(), None),
        }
    }

    fn insert_node(&mut self, name: String, tier: Option<Tier>) -> NodeId {
        let id = NodeId::from_index(self.nodes.len() as u32);
        self.index.insert(name.clone(), id);
        self.nodes.push(Node { id, name, tier });
        self.adjacency.push(Vec::new());
        id
    }

    /// Add a directed edge `from -> to` together with its residual pair.
    ///
    /// Unregistered endpoints are registered without a tier. Parallel edges
    /// are allowed. A negative finite capacity is rejected before anything is
    /// touched. Returns the forward edge's ID.
    pub fn add_edge(
        &mut self,
        from: &str,
        to: &str,
        capacity: impl Into<Capacity>,
    ) -> GraphResult<EdgeId> {
        let capacity = capacity.into();
        if let Capacity::Finite(units) = capacity {
            ensure_non_negative(units, "capacity").map_err(|_| GraphError::InvalidCapacity {
                from: from.to_string(),
                to: to.to_string(),
                capacity: units,
            })?;
        }
        let from = self.ensure_node(from);
        let to = self.ensure_node(to);
        Ok(self.push_pair(from, to, capacity))
    }

    fn push_pair(&mut self, from: NodeId, to: NodeId, capacity: Capacity) -> EdgeId {
        let forward = EdgeId::from_index(self.edges.len() as u32);
        let residual = pair_of(forward);
        self.edges.push(Edge {
            id: forward,
            from,
            to,
            capacity,
            flow: 0,
            kind: EdgeKind::Forward,
        });
        self.edges.push(Edge {
            id: residual,
            from: to,
            to: from,
            capacity: Capacity::Finite(0),
            flow: 0,
            kind: EdgeKind::Residual,
        });
        self.adjacency[from.slot()].push(forward);
        self.adjacency[to.slot()].push(residual);
        forward
    }

    /// Push `amount` along `edge`, keeping its pair skew-symmetric.
    ///
    /// Panics if `edge` is not an edge of this graph.
    pub fn augment(&mut self, edge: EdgeId, amount: Units) {
        self.edges[edge.slot()].flow += amount;
        self.edges[pair_of(edge).slot()].flow -= amount;
        debug_assert!(
            self.edges[edge.slot()].residual_capacity() >= Capacity::Finite(0),
            "augmentation overfilled edge {}",
            edge
        );
    }

    /// Zero every flow, returning the graph to its unsolved state.
    pub fn reset_flows(&mut self) {
        for edge in &mut self.edges {
            edge.flow = 0;
        }
    }

    /// Number of registered nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of real (forward) edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len() / 2
    }

    /// Return all nodes, in registration order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Nodes tagged with `tier`, in registration order.
    pub fn nodes_with_tier(&self, tier: Tier) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(move |n| n.tier == Some(tier))
    }

    /// Get a node by ID (returns None if ID out of bounds).
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.slot())
    }

    /// Look a node up by name.
    pub fn node_id(&self, name: &str) -> Option<NodeId> {
        self.index.get(name)
    }

    /// Display name of a node (panics if ID out of bounds).
    pub fn name(&self, id: NodeId) -> &str {
        &self.nodes[id.slot()].name
    }

    /// Tier of a node, if it has one.
    pub fn tier(&self, id: NodeId) -> Option<Tier> {
        self.node(id).and_then(|n| n.tier)
    }

    /// Return all edges, forward and residual interleaved.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Real edges only, in insertion order.
    pub fn real_edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter().filter(|e| !e.is_residual())
    }

    /// Get an edge by ID (returns None if ID out of bounds).
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id.slot())
    }

    /// The other half of `id`'s pair.
    pub fn pair(&self, id: EdgeId) -> EdgeId {
        pair_of(id)
    }

    /// `capacity - flow` of an edge (panics if ID out of bounds).
    pub fn residual_capacity(&self, id: EdgeId) -> Capacity {
        self.edges[id.slot()].residual_capacity()
    }

    /// IDs of a node's outgoing edges in insertion order.
    ///
    /// Unknown nodes have no edges.
    pub fn outgoing_edges(&self, node: NodeId) -> &[EdgeId] {
        self.adjacency
            .get(node.slot())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// A node's outgoing edges in insertion order.
    pub fn outgoing(&self, node: NodeId) -> impl Iterator<Item = &Edge> {
        self.outgoing_edges(node)
            .iter()
            .map(move |id| &self.edges[id.slot()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_edge_creates_pair() {
        let mut graph = FlowGraph::new();
        let e = graph.add_edge("A", "B", 10).unwrap();
        let a = graph.node_id("A").unwrap();
        let b = graph.node_id("B").unwrap();

        assert_eq!(graph.edges().len(), 2);
        assert_eq!(graph.edge_count(), 1);

        let forward = graph.edge(e).unwrap();
        let residual = graph.edge(forward.pair()).unwrap();
        assert_eq!((forward.from, forward.to), (a, b));
        assert_eq!((residual.from, residual.to), (b, a));
        assert_eq!(residual.capacity, Capacity::Finite(0));
        assert_eq!(residual.kind, EdgeKind::Residual);
        assert_eq!(graph.pair(residual.id), e);

        assert_eq!(graph.outgoing_edges(a), &[e]);
        assert_eq!(graph.outgoing_edges(b), &[forward.pair()]);
    }

    #[test]
    fn add_edge_registers_untiered_endpoints() {
        let mut graph = FlowGraph::new();
        graph.add_edge("A", "B", 1).unwrap();
        let a = graph.node_id("A").unwrap();
        assert_eq!(graph.tier(a), None);

        // A later registration supplies the tier.
        assert_eq!(graph.add_node("A", Tier::Terminal).unwrap(), a);
        assert_eq!(graph.tier(a), Some(Tier::Terminal));
    }

    #[test]
    fn add_node_is_idempotent() {
        let mut graph = FlowGraph::new();
        let a1 = graph.add_node("A", Tier::Store).unwrap();
        let a2 = graph.add_node("A", Tier::Store).unwrap();
        assert_eq!(a1, a2);
        assert_eq!(graph.node_count(), 1);
    }

    #[test]
    fn add_node_rejects_tier_change() {
        let mut graph = FlowGraph::new();
        graph.add_node("A", Tier::Store).unwrap();
        let err = graph.add_node("A", Tier::Warehouse).unwrap_err();
        assert_eq!(
            err,
            GraphError::TierConflict {
                name: "A".into(),
                existing: Tier::Store,
                requested: Tier::Warehouse,
            }
        );
        assert_eq!(graph.tier(graph.node_id("A").unwrap()), Some(Tier::Store));
    }

    #[test]
    fn negative_capacity_leaves_graph_untouched() {
        let mut graph = FlowGraph::new();
        let err = graph.add_edge("A", "B", -5).unwrap_err();
        assert!(matches!(err, GraphError::InvalidCapacity { capacity: -5, .. }));
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edges().len(), 0);
    }

    #[test]
    fn parallel_edges_are_independent() {
        let mut graph = FlowGraph::new();
        let e1 = graph.add_edge("A", "B", 3).unwrap();
        let e2 = graph.add_edge("A", "B", 4).unwrap();
        assert_ne!(e1, e2);
        assert_eq!(graph.edge_count(), 2);
        let a = graph.node_id("A").unwrap();
        assert_eq!(graph.outgoing_edges(a), &[e1, e2]);
    }

    #[test]
    fn augment_keeps_skew_symmetry() {
        let mut graph = FlowGraph::new();
        let e = graph.add_edge("A", "B", 10).unwrap();
        graph.augment(e, 7);
        assert_eq!(graph.edge(e).unwrap().flow, 7);
        assert_eq!(graph.edge(graph.pair(e)).unwrap().flow, -7);
        assert_eq!(graph.residual_capacity(e), Capacity::Finite(3));
        assert_eq!(graph.residual_capacity(graph.pair(e)), Capacity::Finite(7));

        graph.reset_flows();
        assert_eq!(graph.edge(e).unwrap().flow, 0);
        assert_eq!(graph.edge(graph.pair(e)).unwrap().flow, 0);
    }

    #[test]
    fn unbounded_edges_have_unbounded_room() {
        let mut graph = FlowGraph::new();
        let e = graph.add_edge("S", "T", Capacity::Unbounded).unwrap();
        graph.augment(e, 1_000);
        assert_eq!(graph.residual_capacity(e), Capacity::Unbounded);
        assert_eq!(graph.residual_capacity(graph.pair(e)), Capacity::Finite(1_000));
    }
}
