//! Cache Module
//!
//! Single-slot result cache with lazy freshness evaluation.

mod clock;
mod entry;
mod stats;
mod store;

// Re-export public types
pub use clock::{Clock, ManualClock, SystemClock};
pub use entry::{CacheEntry, SlotState};
pub use stats::{CacheStats, StatsCounters};
pub use store::ScoreStore;

// == Public Constants ==
/// Default freshness window in seconds (10 minutes)
pub const DEFAULT_FRESHNESS_WINDOW_SECS: u64 = 600;
