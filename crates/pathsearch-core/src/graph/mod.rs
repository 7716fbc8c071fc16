//! Dense weighted graph storage
//!
//! Provides the immutable adjacency-matrix graph that every search runs against:
//! - `GraphStore`: square weight matrix, zero meaning "no edge"
//! - `Cost`: path cost with an infinite sentinel
//! - Matrix text parsing and file loading

pub mod store;
pub mod types;

pub use store::GraphStore;
pub use types::{Cost, NodeId, Weight, MAX_WEIGHT};
