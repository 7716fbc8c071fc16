use super::frontier::{Frontier, FrontierEntry, Strategy};
use super::path::reconstruct;
use super::result::SearchResult;
use super::stats::StatsCollector;
use crate::error::{Result, SearchError};
use crate::graph::{Cost, GraphStore, NodeId};
use std::thread;
use tracing::{debug, trace};

/// Cost and parent tables owned by a single run.
///
/// A finite `cost[n]` is the cost of some discovered path to `n`; it only
/// ever decreases, and `parent[n]` is the predecessor on that path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchState {
    cost: Vec<Cost>,
    parent: Vec<Option<NodeId>>,
}

impl SearchState {
    fn new(node_count: usize, source: NodeId) -> Self {
        let mut cost = vec![Cost::INFINITE; node_count];
        cost[source] = Cost::ZERO;
        Self {
            cost,
            parent: vec![None; node_count],
        }
    }

    /// Best known cost of `node`, infinite if never reached
    pub fn cost(&self, node: NodeId) -> Cost {
        self.cost.get(node).copied().unwrap_or(Cost::INFINITE)
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.parent.get(node).copied().flatten()
    }

    pub fn parents(&self) -> &[Option<NodeId>] {
        &self.parent
    }

    /// Record `from -> to` if `candidate` beats the current cost of `to`
    fn relax(&mut self, from: NodeId, to: NodeId, candidate: Cost) -> bool {
        if candidate < self.cost[to] {
            self.cost[to] = candidate;
            self.parent[to] = Some(from);
            true
        } else {
            false
        }
    }
}

/// Run the relaxation loop until the frontier is empty.
///
/// The loop only talks to the `Frontier` trait; the traversal order is
/// entirely the frontier's business.
fn relax_until_exhausted(
    graph: &GraphStore,
    frontier: &mut dyn Frontier,
    source: NodeId,
    target: NodeId,
    stats: &mut StatsCollector,
) -> Result<SearchState> {
    let mut state = SearchState::new(graph.node_count(), source);

    frontier.push(FrontierEntry::new(source, Cost::ZERO));
    stats.record_push();

    while let Some(entry) = frontier.pop() {
        stats.record_pop();

        let current = entry.node;
        let current_cost = state.cost(current);
        if entry.cost > current_cost {
            stats.record_stale();
            trace!(node = current, recorded = %entry.cost, best = %current_cost, "skip_stale");
            continue;
        }

        // A zero-length query is answered by the source alone
        if source == target {
            break;
        }

        for (neighbor, weight) in graph.neighbors(current)? {
            let candidate = current_cost.extend(weight);
            if state.relax(current, neighbor, candidate) {
                frontier.push(FrontierEntry::new(neighbor, candidate));
                stats.record_push();
            }
        }
    }

    Ok(state)
}

/// Search `graph` from `source` to `target` with the given frontier strategy.
///
/// The frontier is always run to exhaustion, so the priority strategy yields a
/// globally minimal cost. An unreachable target is a normal result with an
/// infinite cost and an empty path.
#[tracing::instrument(skip(graph), fields(strategy = %strategy, node_count = graph.node_count()))]
pub fn run(
    graph: &GraphStore,
    strategy: Strategy,
    source: NodeId,
    target: NodeId,
) -> Result<SearchResult> {
    graph.check_node(source)?;
    graph.check_node(target)?;

    let mut stats = StatsCollector::start();
    let mut frontier = strategy.frontier();
    let state = relax_until_exhausted(graph, frontier.as_mut(), source, target, &mut stats)?;

    let path = match reconstruct(state.parents(), source, target) {
        Ok(path) => Some(path),
        Err(SearchError::Unreachable { .. }) => None,
        Err(e) => return Err(e),
    };
    let stats = stats.finish();

    debug!(
        reachable = path.is_some(),
        total_cost = %state.cost(target),
        nodes_pushed = stats.nodes_pushed,
        nodes_popped = stats.nodes_popped,
        stale_skipped = stats.stale_skipped,
        elapsed = ?stats.elapsed,
        "search_complete"
    );

    Ok(SearchResult::new(
        strategy, source, target, path, state, stats,
    ))
}

/// Run every strategy in `strategies` against the same graph.
///
/// Each run gets its own thread, state and frontier; the graph is only
/// borrowed. Results come back in the order of `strategies`.
#[tracing::instrument(skip(graph, strategies), fields(runs = strategies.len()))]
pub fn compare(
    graph: &GraphStore,
    strategies: &[Strategy],
    source: NodeId,
    target: NodeId,
) -> Result<Vec<SearchResult>> {
    graph.check_node(source)?;
    graph.check_node(target)?;

    thread::scope(|scope| {
        let handles: Vec<_> = strategies
            .iter()
            .map(|&strategy| scope.spawn(move || run(graph, strategy, source, target)))
            .collect();

        handles
            .into_iter()
            .zip(strategies)
            .map(|(handle, strategy)| {
                handle.join().map_err(|_| {
                    SearchError::Other(format!("{} search thread panicked", strategy))
                })?
            })
            .collect()
    })
}
