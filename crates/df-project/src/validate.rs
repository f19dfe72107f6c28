//! Topology validation logic.

use std::collections::HashMap;

use df_core::{Tier, ensure_non_negative};

use crate::schema::{CapacityDef, LATEST_VERSION, Topology};

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: String, context: String },

    #[error("Missing reference: {id} in {context}")]
    MissingReference { id: String, context: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_topology(topology: &Topology) -> Result<(), ValidationError> {
    if topology.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: topology.version,
        });
    }

    let mut tiers = HashMap::new();
    for node in &topology.nodes {
        if tiers.insert(node.id.as_str(), node.tier).is_some() {
            return Err(ValidationError::DuplicateId {
                id: node.id.clone(),
                context: format!("topology '{}' nodes", topology.name),
            });
        }
    }

    for (role, id, expected) in [
        ("source", &topology.source, Tier::Source),
        ("sink", &topology.sink, Tier::Sink),
    ] {
        match tiers.get(id.as_str()) {
            None => {
                return Err(ValidationError::MissingReference {
                    id: id.clone(),
                    context: format!("topology '{}' {}", topology.name, role),
                });
            }
            Some(&tier) if tier != expected => {
                return Err(ValidationError::InvalidValue {
                    field: format!("{} '{}' tier", role, id),
                    value: tier.to_string(),
                    reason: format!("must be {}", expected),
                });
            }
            Some(_) => {}
        }
    }

    for edge in &topology.edges {
        for endpoint in [&edge.from, &edge.to] {
            if !tiers.contains_key(endpoint.as_str()) {
                return Err(ValidationError::MissingReference {
                    id: endpoint.clone(),
                    context: format!("edge '{}' -> '{}'", edge.from, edge.to),
                });
            }
        }
        if let CapacityDef::Units(units) = edge.capacity {
            if ensure_non_negative(units, "capacity").is_err() {
                return Err(ValidationError::InvalidValue {
                    field: format!("edge '{}' -> '{}' capacity", edge.from, edge.to),
                    value: units.to_string(),
                    reason: "must be non-negative".to_string(),
                });
            }
        }
    }

    Ok(())
}
