//! Cache Entry Module
//!
//! The single slot holding the last computed lookup result.

use serde::Serialize;

use crate::score::ScoreResult;

// == Slot State ==
/// Freshness of the slot, evaluated lazily at read time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotState {
    /// Nothing computed since process start
    Empty,
    /// Younger than the freshness window
    Fresh,
    /// At or past the freshness window
    Stale,
}

// == Cache Entry ==
/// Last computed result and when it was computed.
#[derive(Debug, Clone, Default)]
pub struct CacheEntry {
    /// Computation timestamp (Unix milliseconds)
    pub computed_at_ms: u64,
    /// Last result, None until the first successful lookup
    pub payload: Option<ScoreResult>,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates an empty entry.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Age of the payload in milliseconds at `now_ms`.
    ///
    /// Saturates at zero if the clock moved backwards.
    pub fn age_ms(&self, now_ms: u64) -> u64 {
        now_ms.saturating_sub(self.computed_at_ms)
    }

    // == State ==
    /// Classifies the slot against the freshness window.
    ///
    /// Boundary condition: an age equal to the window is already stale.
    pub fn state(&self, now_ms: u64, window_ms: u64) -> SlotState {
        match self.payload {
            None => SlotState::Empty,
            Some(_) if self.age_ms(now_ms) < window_ms => SlotState::Fresh,
            Some(_) => SlotState::Stale,
        }
    }

    /// Returns the payload if it is still fresh.
    pub fn fresh(&self, now_ms: u64, window_ms: u64) -> Option<&ScoreResult> {
        match self.state(now_ms, window_ms) {
            SlotState::Fresh => self.payload.as_ref(),
            _ => None,
        }
    }

    /// Returns the payload if it may stand in for a failed lookup.
    ///
    /// A cached `NoMatch` never qualifies, regardless of age.
    pub fn fallback(&self) -> Option<&ScoreResult> {
        self.payload.as_ref().filter(|result| !result.is_no_match())
    }
}
