//! API Handlers
//!
//! HTTP request handlers for each score service endpoint.

use axum::{extract::State, Json};

use crate::error::Result;
use crate::models::{HealthResponse, StatsResponse};
use crate::score::ScoreResult;
use crate::service::ScoreLookupService;

/// Application state shared across all handlers.
///
/// Holds the one lookup service of the process; clones share its cache slot.
#[derive(Clone)]
pub struct AppState {
    pub lookup: ScoreLookupService,
}

impl AppState {
    /// Creates a new AppState around the given lookup service.
    pub fn new(lookup: ScoreLookupService) -> Self {
        Self { lookup }
    }
}

/// Handler for GET /api/score
///
/// Returns the current broadcast state, or a 500 with `{error, detail}` when
/// the upstream failed and no fallback was available.
pub async fn score_handler(State(state): State<AppState>) -> Result<Json<ScoreResult>> {
    let result = state.lookup.get_latest_score().await?;
    Ok(Json(result))
}

/// Handler for GET /stats
///
/// Returns lookup counters and the current cache slot state.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let now = state.lookup.now_ms();
    let store = state.lookup.store();
    let store = store.read().await;

    let age_ms = store
        .entry()
        .payload
        .as_ref()
        .map(|_| store.entry().age_ms(now));

    Json(StatsResponse::new(&store.stats(), store.state(now), age_ms))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
