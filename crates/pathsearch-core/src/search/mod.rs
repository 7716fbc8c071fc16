//! Single-source shortest-path search with pluggable frontiers
//!
//! One relaxation loop serves three traversal orders:
//! - `frontier`: the `Frontier` trait and its stack, queue and priority variants
//! - `engine`: the relaxation loop and multi-strategy comparison
//! - `path`: parent-pointer path reconstruction
//! - `stats`: push/pop counters and wall-clock timing
//! - `result`: the read-only outcome of one run

pub mod engine;
pub mod frontier;
pub mod path;
pub mod result;
pub mod stats;

pub use engine::{compare, run, SearchState};
pub use frontier::{Frontier, FrontierEntry, Strategy};
pub use path::reconstruct;
pub use result::SearchResult;
pub use stats::{SearchStats, StatsCollector};
