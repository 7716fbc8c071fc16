use serde::{Serialize, Serializer};
use std::fmt;

/// Index of a node in the adjacency matrix
pub type NodeId = usize;

/// Weight of a single edge; zero means the edge is absent
pub type Weight = u64;

/// Largest accepted edge weight.
///
/// A simple path has fewer than `u32::MAX` edges in any matrix that fits in
/// memory, so its cost stays strictly below `Cost::INFINITE`.
pub const MAX_WEIGHT: Weight = u32::MAX as Weight;

/// Accumulated cost of a path from the search source.
///
/// `Cost::INFINITE` is the sentinel for "no path discovered yet". Addition
/// saturates at the sentinel so relaxing from an unreached node can never
/// produce a finite candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cost(u64);

impl Cost {
    pub const ZERO: Cost = Cost(0);
    pub const INFINITE: Cost = Cost(u64::MAX);

    pub fn new(cost: u64) -> Self {
        Cost(cost)
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    pub fn is_finite(&self) -> bool {
        *self != Self::INFINITE
    }

    /// Finite value, or `None` for the sentinel
    pub fn finite(&self) -> Option<u64> {
        self.is_finite().then_some(self.0)
    }

    /// Cost of extending this path by one edge
    pub fn extend(self, weight: Weight) -> Self {
        Cost(self.0.saturating_add(weight))
    }
}

impl Default for Cost {
    fn default() -> Self {
        Self::INFINITE
    }
}

impl From<u64> for Cost {
    fn from(cost: u64) -> Self {
        Cost(cost)
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.finite() {
            Some(value) => write!(f, "{}", value),
            None => write!(f, "inf"),
        }
    }
}

/// Serialized as a number, or `null` when infinite
impl Serialize for Cost {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.finite().serialize(serializer)
    }
}
