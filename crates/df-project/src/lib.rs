//! df-project: topology file format, validation and graph building.

pub mod build;
pub mod reference;
pub mod schema;
pub mod validate;

pub use build::build_graph;
pub use schema::*;
pub use validate::{ValidationError, validate_topology};

use tracing::debug;

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Graph error: {0}")]
    Graph(#[from] df_graph::GraphError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn load_yaml(path: &std::path::Path) -> ProjectResult<Topology> {
    let content = std::fs::read_to_string(path)?;
    let topology: Topology = serde_yaml::from_str(&content)?;
    validate_topology(&topology)?;
    debug!(path = %path.display(), name = %topology.name, "loaded topology");
    Ok(topology)
}

pub fn save_yaml(path: &std::path::Path, topology: &Topology) -> ProjectResult<()> {
    validate_topology(topology)?;
    let content = serde_yaml::to_string(topology)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &std::path::Path) -> ProjectResult<Topology> {
    let content = std::fs::read_to_string(path)?;
    let topology: Topology = serde_json::from_str(&content)?;
    validate_topology(&topology)?;
    debug!(path = %path.display(), name = %topology.name, "loaded topology");
    Ok(topology)
}

pub fn save_json(path: &std::path::Path, topology: &Topology) -> ProjectResult<()> {
    validate_topology(topology)?;
    let content = serde_json::to_string_pretty(topology)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Load by extension: `.json` as JSON, anything else as YAML.
pub fn load(path: &std::path::Path) -> ProjectResult<Topology> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => load_json(path),
        _ => load_yaml(path),
    }
}
