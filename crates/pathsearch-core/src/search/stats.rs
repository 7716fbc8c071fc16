use serde::{Serialize, Serializer};
use std::time::{Duration, Instant};

/// Counters and timing for one finished search run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Entries pushed onto the frontier, including the source
    pub nodes_pushed: u64,
    /// Entries popped from the frontier, including stale ones
    pub nodes_popped: u64,
    /// Popped entries discarded because a cheaper path had been found
    pub stale_skipped: u64,
    /// Wall-clock time of the run
    #[serde(rename = "elapsed_secs", serialize_with = "serialize_secs")]
    pub elapsed: Duration,
}

impl SearchStats {
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

fn serialize_secs<S: Serializer>(elapsed: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(elapsed.as_secs_f64())
}

/// Observes one search run. Never touches graph or frontier state.
#[derive(Debug)]
pub struct StatsCollector {
    started: Instant,
    nodes_pushed: u64,
    nodes_popped: u64,
    stale_skipped: u64,
}

impl StatsCollector {
    /// Start the clock
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
            nodes_pushed: 0,
            nodes_popped: 0,
            stale_skipped: 0,
        }
    }

    pub fn record_push(&mut self) {
        self.nodes_pushed += 1;
    }

    pub fn record_pop(&mut self) {
        self.nodes_popped += 1;
    }

    pub fn record_stale(&mut self) {
        self.stale_skipped += 1;
    }

    pub fn nodes_pushed(&self) -> u64 {
        self.nodes_pushed
    }

    pub fn nodes_popped(&self) -> u64 {
        self.nodes_popped
    }

    /// Stop the clock and freeze the counters
    pub fn finish(self) -> SearchStats {
        SearchStats {
            nodes_pushed: self.nodes_pushed,
            nodes_popped: self.nodes_popped,
            stale_skipped: self.stale_skipped,
            elapsed: self.started.elapsed(),
        }
    }
}
