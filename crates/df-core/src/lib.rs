//! df-core: stable foundation for distflow.
//!
//! Contains:
//! - ids (stable compact IDs for nodes and edges)
//! - tier (network layering tags)
//! - capacity (finite/unbounded edge capacities)
//! - numeric (integer flow helpers)
//! - error (shared error types)
//! - timing (opt-in wall clock timers)

pub mod capacity;
pub mod error;
pub mod ids;
pub mod numeric;
pub mod tier;
pub mod timing;

// Re-exports: nice ergonomics for downstream crates
pub use capacity::Capacity;
pub use error::{CoreError, CoreResult};
pub use ids::*;
pub use numeric::*;
pub use tier::Tier;
