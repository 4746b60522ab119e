//! Score Lookup - live-score service for a futsal club channel
//!
//! Reports whether the club's channel is live, the score of its latest
//! finished match, or nothing, behind a single-slot TTL cache that protects
//! the upstream search quota.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod score;
pub mod service;
pub mod upstream;

pub use api::AppState;
pub use config::Config;
pub use service::ScoreLookupService;
