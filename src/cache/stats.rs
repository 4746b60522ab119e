//! Cache Statistics Module
//!
//! Tracks how lookups were answered: from the fresh slot, from upstream,
//! from a stale fallback, or not at all.

use std::sync::atomic::{AtomicU64, Ordering};

// == Cache Stats ==
/// Point-in-time copy of the lookup outcome counters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Lookups answered from a fresh slot
    pub fresh_hits: u64,
    /// Lookups that contacted the upstream API
    pub upstream_lookups: u64,
    /// Failed lookups answered with a stale result
    pub stale_serves: u64,
    /// Failed lookups surfaced to the caller
    pub failures: u64,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Share of lookups that avoided the upstream API.
    ///
    /// Returns 0.0 if no lookups have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.fresh_hits + self.upstream_lookups;
        if total == 0 {
            0.0
        } else {
            self.fresh_hits as f64 / total as f64
        }
    }
}

// == Stats Counters ==
/// Live counters, updated through a shared reference so cache reads can
/// proceed under a read lock.
#[derive(Debug, Default)]
pub struct StatsCounters {
    fresh_hits: AtomicU64,
    upstream_lookups: AtomicU64,
    stale_serves: AtomicU64,
    failures: AtomicU64,
}

impl StatsCounters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_fresh_hit(&self) {
        self.fresh_hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_upstream_lookup(&self) {
        self.upstream_lookups.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_stale_serve(&self) {
        self.stale_serves.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_failure(&self) {
        self.failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Copies the current counter values.
    pub fn snapshot(&self) -> CacheStats {
        CacheStats {
            fresh_hits: self.fresh_hits.load(Ordering::Relaxed),
            upstream_lookups: self.upstream_lookups.load(Ordering::Relaxed),
            stale_serves: self.stale_serves.load(Ordering::Relaxed),
            failures: self.failures.load(Ordering::Relaxed),
        }
    }
}
