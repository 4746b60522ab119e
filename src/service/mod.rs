//! Service Module
//!
//! The score lookup operation and its cache policy.

mod lookup;

pub use lookup::ScoreLookupService;
