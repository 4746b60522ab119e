//! API Module
//!
//! HTTP handlers and routing for the score service.
//!
//! # Endpoints
//! - `GET /api/score` - Current live/finished/no-match state
//! - `GET /stats` - Lookup statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
