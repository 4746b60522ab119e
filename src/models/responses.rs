//! Response DTOs for the score lookup API
//!
//! Defines the structure of outgoing HTTP response bodies other than the
//! score itself, which serializes directly from `ScoreResult`.

use serde::Serialize;

use crate::cache::{CacheStats, SlotState};

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Lookups answered from the fresh slot
    pub fresh_hits: u64,
    /// Lookups that went to the upstream API
    pub upstream_lookups: u64,
    /// Failures answered with a stale result
    pub stale_serves: u64,
    /// Failures surfaced to callers
    pub failures: u64,
    /// fresh_hits / (fresh_hits + upstream_lookups)
    pub hit_rate: f64,
    /// Current slot state
    pub slot: SlotState,
    /// Age of the cached result in seconds, if any
    pub age_secs: Option<u64>,
}

impl StatsResponse {
    /// Creates a new StatsResponse from cache statistics and slot state
    pub fn new(stats: &CacheStats, slot: SlotState, age_ms: Option<u64>) -> Self {
        Self {
            fresh_hits: stats.fresh_hits,
            upstream_lookups: stats.upstream_lookups,
            stale_serves: stats.stale_serves,
            failures: stats.failures,
            hit_rate: stats.hit_rate(),
            slot,
            age_secs: age_ms.map(|ms| ms / 1000),
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for an unrecoverable lookup failure
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Short summary of what failed
    pub error: String,
    /// Underlying cause
    pub detail: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            detail: detail.into(),
        }
    }
}
