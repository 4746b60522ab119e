//! Score Store Module
//!
//! Single-slot store for the last lookup result with a freshness window.

use crate::cache::{CacheEntry, CacheStats, SlotState, StatsCounters};
use crate::score::ScoreResult;

// == Score Store ==
/// One cache slot plus its statistics.
///
/// Exactly one store exists per hosting process; it is owned by the lookup
/// service and shared across concurrent requests behind a read/write lock.
/// Reads and counter updates only need the read side; `store` needs the
/// write side.
#[derive(Debug)]
pub struct ScoreStore {
    /// The cached result
    entry: CacheEntry,
    /// Lookup statistics
    stats: StatsCounters,
    /// Freshness window in milliseconds
    window_ms: u64,
}

impl ScoreStore {
    // == Constructor ==
    /// Creates an empty store.
    ///
    /// # Arguments
    /// * `window_secs` - Freshness window in seconds
    pub fn new(window_secs: u64) -> Self {
        Self {
            entry: CacheEntry::empty(),
            stats: StatsCounters::new(),
            window_ms: window_secs.saturating_mul(1000),
        }
    }

    // == Fresh Read ==
    /// Returns the cached result if it is younger than the window.
    ///
    /// Counts a fresh hit when it does.
    pub fn fresh(&self, now_ms: u64) -> Option<ScoreResult> {
        let hit = self.entry.fresh(now_ms, self.window_ms).cloned();
        if hit.is_some() {
            self.stats.record_fresh_hit();
        }
        hit
    }

    // == Store ==
    /// Overwrites the slot with a new result stamped at `now_ms`.
    pub fn store(&mut self, result: ScoreResult, now_ms: u64) {
        self.entry = CacheEntry {
            computed_at_ms: now_ms,
            payload: Some(result),
        };
    }

    // == Fallback ==
    /// Returns the cached result to serve after an upstream failure.
    ///
    /// Leaves the timestamp untouched so the entry keeps aging. Records a
    /// stale serve or a failure depending on the outcome.
    pub fn fallback(&self) -> Option<ScoreResult> {
        let fallback = self.entry.fallback().cloned();
        match fallback {
            Some(_) => self.stats.record_stale_serve(),
            None => self.stats.record_failure(),
        }
        fallback
    }

    pub fn record_upstream_lookup(&self) {
        self.stats.record_upstream_lookup();
    }

    pub fn state(&self, now_ms: u64) -> SlotState {
        self.entry.state(now_ms, self.window_ms)
    }

    pub fn entry(&self) -> &CacheEntry {
        &self.entry
    }

    /// Snapshot of the lookup counters.
    pub fn stats(&self) -> CacheStats {
        self.stats.snapshot()
    }

    pub fn window_ms(&self) -> u64 {
        self.window_ms
    }
}
