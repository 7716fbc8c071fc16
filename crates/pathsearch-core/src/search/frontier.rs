use crate::error::SearchError;
use crate::graph::{Cost, NodeId};
use serde::{Deserialize, Serialize};
use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, VecDeque};
use std::fmt;
use std::str::FromStr;

/// A pending node together with its cost when it was pushed.
///
/// The same node may sit in a frontier several times; entries whose cost is
/// above the node's current best are stale and get skipped by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierEntry {
    pub node: NodeId,
    pub cost: Cost,
}

impl FrontierEntry {
    pub fn new(node: NodeId, cost: Cost) -> Self {
        Self { node, cost }
    }
}

/// Ordered work-list of pending nodes.
///
/// Implementations decide only which entry comes out next.
pub trait Frontier {
    fn push(&mut self, entry: FrontierEntry);
    fn pop(&mut self) -> Option<FrontierEntry>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Last-in-first-out frontier (depth-biased)
#[derive(Debug, Default)]
pub struct StackFrontier {
    entries: Vec<FrontierEntry>,
}

impl Frontier for StackFrontier {
    fn push(&mut self, entry: FrontierEntry) {
        self.entries.push(entry);
    }

    fn pop(&mut self) -> Option<FrontierEntry> {
        self.entries.pop()
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

/// First-in-first-out frontier (level-biased)
#[derive(Debug, Default)]
pub struct QueueFrontier {
    entries: VecDeque<FrontierEntry>,
}

impl Frontier for QueueFrontier {
    fn push(&mut self, entry: FrontierEntry) {
        self.entries.push_back(entry);
    }

    fn pop(&mut self) -> Option<FrontierEntry> {
        self.entries.pop_front()
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Heap slot ordered by cost, then by insertion sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct HeapEntry {
    cost: Cost,
    seq: u64,
    node: NodeId,
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost
            .cmp(&other.cost)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// Minimum-cost-first frontier (cost-biased).
///
/// Equal costs pop in insertion order.
#[derive(Debug, Default)]
pub struct PriorityFrontier {
    heap: BinaryHeap<Reverse<HeapEntry>>,
    next_seq: u64,
}

impl Frontier for PriorityFrontier {
    fn push(&mut self, entry: FrontierEntry) {
        self.heap.push(Reverse(HeapEntry {
            cost: entry.cost,
            seq: self.next_seq,
            node: entry.node,
        }));
        self.next_seq += 1;
    }

    fn pop(&mut self) -> Option<FrontierEntry> {
        self.heap
            .pop()
            .map(|Reverse(slot)| FrontierEntry::new(slot.node, slot.cost))
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}

/// Traversal discipline selected when a search is started
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Stack-ordered iterative search
    Stack,
    /// Breadth-first search over a queue
    Queue,
    /// Uniform-cost (Dijkstra) search over a priority queue
    #[serde(rename = "priority", alias = "priority-queue")]
    PriorityQueue,
}

impl Strategy {
    /// All strategies in reporting order
    pub const ALL: [Strategy; 3] = [Strategy::Stack, Strategy::Queue, Strategy::PriorityQueue];

    /// Create an empty frontier for this strategy
    pub fn frontier(self) -> Box<dyn Frontier + Send> {
        match self {
            Strategy::Stack => Box::<StackFrontier>::default(),
            Strategy::Queue => Box::<QueueFrontier>::default(),
            Strategy::PriorityQueue => Box::<PriorityFrontier>::default(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Stack => "stack",
            Strategy::Queue => "queue",
            Strategy::PriorityQueue => "priority",
        }
    }

    /// Human label for report headings
    pub fn label(&self) -> &'static str {
        match self {
            Strategy::Stack => "Iterative search (stack)",
            Strategy::Queue => "Breadth-first search (queue)",
            Strategy::PriorityQueue => "Uniform cost search (priority queue)",
        }
    }
}

impl FromStr for Strategy {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "stack" | "lifo" | "dfs" => Ok(Strategy::Stack),
            "queue" | "fifo" | "bfs" => Ok(Strategy::Queue),
            "priority" | "priority-queue" | "pq" | "ucs" | "dijkstra" => {
                Ok(Strategy::PriorityQueue)
            }
            other => Err(SearchError::UnknownStrategy(other.to_string())),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(frontier: &mut dyn Frontier) -> Vec<NodeId> {
        std::iter::from_fn(|| frontier.pop().map(|e| e.node)).collect()
    }

    fn fill(frontier: &mut dyn Frontier, entries: &[(NodeId, u64)]) {
        for &(node, cost) in entries {
            frontier.push(FrontierEntry::new(node, Cost::new(cost)));
        }
    }

    #[test]
    fn test_stack_pops_most_recent_first() {
        let mut frontier = StackFrontier::default();
        fill(&mut frontier, &[(1, 5), (2, 1), (3, 9)]);
        assert_eq!(frontier.len(), 3);
        assert_eq!(drain(&mut frontier), vec![3, 2, 1]);
        assert!(frontier.is_empty());
    }

    #[test]
    fn test_queue_pops_earliest_first() {
        let mut frontier = QueueFrontier::default();
        fill(&mut frontier, &[(1, 5), (2, 1), (3, 9)]);
        assert_eq!(drain(&mut frontier), vec![1, 2, 3]);
    }

    #[test]
    fn test_priority_pops_lowest_cost_first() {
        let mut frontier = PriorityFrontier::default();
        fill(&mut frontier, &[(1, 5), (2, 1), (3, 9), (4, 3)]);
        assert_eq!(drain(&mut frontier), vec![2, 4, 1, 3]);
    }

    #[test]
    fn test_priority_ties_pop_in_insertion_order() {
        let mut frontier = PriorityFrontier::default();
        fill(&mut frontier, &[(7, 2), (3, 2), (5, 2), (1, 1)]);
        assert_eq!(drain(&mut frontier), vec![1, 7, 3, 5]);
    }

    #[test]
    fn test_priority_keeps_duplicate_entries() {
        let mut frontier = PriorityFrontier::default();
        fill(&mut frontier, &[(4, 10), (4, 6)]);
        let first = frontier.pop().unwrap();
        let second = frontier.pop().unwrap();
        assert_eq!(first, FrontierEntry::new(4, Cost::new(6)));
        assert_eq!(second, FrontierEntry::new(4, Cost::new(10)));
    }

    #[test]
    fn test_pop_on_empty_frontier() {
        for strategy in Strategy::ALL {
            let mut frontier = strategy.frontier();
            assert!(frontier.is_empty());
            assert_eq!(frontier.pop(), None);
        }
    }

    #[test]
    fn test_strategy_parsing() {
        assert_eq!("stack".parse::<Strategy>().unwrap(), Strategy::Stack);
        assert_eq!("BFS".parse::<Strategy>().unwrap(), Strategy::Queue);
        assert_eq!(
            "dijkstra".parse::<Strategy>().unwrap(),
            Strategy::PriorityQueue
        );
        assert!(matches!(
            "heap".parse::<Strategy>(),
            Err(SearchError::UnknownStrategy(_))
        ));
    }

    #[test]
    fn test_strategy_display_round_trips() {
        for strategy in Strategy::ALL {
            assert_eq!(strategy.to_string().parse::<Strategy>().unwrap(), strategy);
        }
    }
}
