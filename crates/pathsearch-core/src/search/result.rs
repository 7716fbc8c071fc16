use super::engine::SearchState;
use super::frontier::Strategy;
use super::stats::SearchStats;
use crate::graph::{Cost, NodeId};
use serde::Serialize;

/// Outcome of one search run. Read-only once built.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResult {
    strategy: Strategy,
    source: NodeId,
    target: NodeId,
    reachable: bool,
    /// `source ..= target`, empty when the target is unreachable
    path: Vec<NodeId>,
    hops: Option<usize>,
    total_cost: Cost,
    stats: SearchStats,
    #[serde(skip)]
    state: SearchState,
}

impl SearchResult {
    pub(crate) fn new(
        strategy: Strategy,
        source: NodeId,
        target: NodeId,
        path: Option<Vec<NodeId>>,
        state: SearchState,
        stats: SearchStats,
    ) -> Self {
        let total_cost = match path {
            Some(_) => state.cost(target),
            None => Cost::INFINITE,
        };
        let hops = path.as_ref().map(|p| p.len() - 1);
        Self {
            strategy,
            source,
            target,
            reachable: path.is_some(),
            path: path.unwrap_or_default(),
            hops,
            total_cost,
            stats,
            state,
        }
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn source(&self) -> NodeId {
        self.source
    }

    pub fn target(&self) -> NodeId {
        self.target
    }

    pub fn is_reachable(&self) -> bool {
        self.reachable
    }

    pub fn path(&self) -> &[NodeId] {
        &self.path
    }

    /// `path.len() - 1`, or `None` when unreachable
    pub fn hops(&self) -> Option<usize> {
        self.hops
    }

    pub fn total_cost(&self) -> Cost {
        self.total_cost
    }

    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Final cost and parent tables of the run
    pub fn state(&self) -> &SearchState {
        &self.state
    }

    /// Space-separated node ids, or `unreachable`
    pub fn path_display(&self) -> String {
        if self.reachable {
            self.path
                .iter()
                .map(|n| n.to_string())
                .collect::<Vec<_>>()
                .join(" ")
        } else {
            "unreachable".to_string()
        }
    }
}
