//! Topology file schema.

use df_core::{Capacity, Tier, Units};
use serde::{Deserialize, Serialize};

pub const LATEST_VERSION: u32 = 1;

/// A distribution network as stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Topology {
    pub version: u32,
    pub name: String,
    /// Node ID of the super-source.
    pub source: String,
    /// Node ID of the super-sink.
    pub sink: String,
    #[serde(default)]
    pub nodes: Vec<NodeDef>,
    #[serde(default)]
    pub edges: Vec<EdgeDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NodeDef {
    pub id: String,
    pub tier: Tier,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EdgeDef {
    pub from: String,
    pub to: String,
    pub capacity: CapacityDef,
}

/// Either a number of units or the keyword `unbounded`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum CapacityDef {
    Units(Units),
    Keyword(CapacityKeyword),
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CapacityKeyword {
    Unbounded,
}

impl From<CapacityDef> for Capacity {
    fn from(def: CapacityDef) -> Self {
        match def {
            CapacityDef::Units(units) => Capacity::Finite(units),
            CapacityDef::Keyword(CapacityKeyword::Unbounded) => Capacity::Unbounded,
        }
    }
}

impl From<Capacity> for CapacityDef {
    fn from(capacity: Capacity) -> Self {
        match capacity {
            Capacity::Finite(units) => CapacityDef::Units(units),
            Capacity::Unbounded => CapacityDef::Keyword(CapacityKeyword::Unbounded),
        }
    }
}

impl EdgeDef {
    pub fn new(from: impl Into<String>, to: impl Into<String>, capacity: impl Into<Capacity>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            capacity: CapacityDef::from(capacity.into()),
        }
    }
}

impl NodeDef {
    pub fn new(id: impl Into<String>, tier: Tier) -> Self {
        Self {
            id: id.into(),
            tier,
        }
    }
}
