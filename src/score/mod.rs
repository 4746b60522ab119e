//! Score Module
//!
//! Lookup outcome model and the title heuristics used to build it.

mod result;
mod title;


// Re-export public types
pub use result::{watch_url, ScoreKind, ScoreResult};
pub use title::{TitleMatcher, DEFAULT_ALIASES};
