//! Name lookup for graph nodes.
//!
//! Nodes are addressed by display name at the edges of the system (topology
//! files, CLI) and by dense `NodeId` inside the solver. `NameIndex` maps the
//! former to the latter; `NodeRef` lets callers pass either.

use std::collections::HashMap;

use df_core::NodeId;

use crate::error::{GraphError, GraphResult};
use crate::graph::FlowGraph;

/// Name -> NodeId lookup, filled as nodes are registered.
#[derive(Debug, Clone, Default)]
pub struct NameIndex {
    by_name: HashMap<String, NodeId>,
}

impl NameIndex {
    pub fn get(&self, name: &str) -> Option<NodeId> {
        self.by_name.get(name).copied()
    }

    pub(crate) fn insert(&mut self, name: String, id: NodeId) {
        self.by_name.insert(name, id);
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

/// Anything that can name a node of a `FlowGraph`.
pub trait NodeRef {
    /// Resolve to a registered node, failing if it is not in `graph`.
    fn resolve(&self, graph: &FlowGraph) -> GraphResult<NodeId>;
}

impl NodeRef for NodeId {
    fn resolve(&self, graph: &FlowGraph) -> GraphResult<NodeId> {
        if self.slot() < graph.node_count() {
            Ok(*self)
        } else {
            Err(GraphError::UnknownNodeId { id: *self })
        }
    }
}

impl NodeRef for str {
    fn resolve(&self, graph: &FlowGraph) -> GraphResult<NodeId> {
        graph.node_id(self).ok_or_else(|| GraphError::UnknownNode {
            name: self.to_string(),
        })
    }
}

impl NodeRef for String {
    fn resolve(&self, graph: &FlowGraph) -> GraphResult<NodeId> {
        self.as_str().resolve(graph)
    }
}

impl<T: NodeRef + ?Sized> NodeRef for &T {
    fn resolve(&self, graph: &FlowGraph) -> GraphResult<NodeId> {
        (**self).resolve(graph)
    }
}
