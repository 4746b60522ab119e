//! Score Lookup Service
//!
//! Answers "what is the channel broadcasting?" while keeping upstream calls to
//! at most one refresh per freshness window.
//!
//! # Precedence
//! 1. Fresh cached result (including a fresh `NoMatch`)
//! 2. Upstream: live broadcast, then the latest finished match
//! 3. On upstream failure: the stale cached result, unless it is `NoMatch`
//! 4. Otherwise `LookupError::UpstreamUnavailable`

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::cache::{Clock, ScoreStore, SystemClock};
use crate::config::Config;
use crate::error::{Result, UpstreamError};
use crate::score::{ScoreResult, TitleMatcher};
use crate::upstream::VideoSearch;

// == Score Lookup Service ==
/// Cached, two-stage lookup of the channel's current broadcast state.
///
/// Cloning shares the same cache slot.
#[derive(Clone)]
pub struct ScoreLookupService {
    search: Arc<dyn VideoSearch>,
    store: Arc<RwLock<ScoreStore>>,
    clock: Arc<dyn Clock>,
    matcher: TitleMatcher,
    channel_id: String,
    recent_limit: u32,
}

impl ScoreLookupService {
    // == Constructor ==
    /// Creates a service over the given search backend and cache slot.
    pub fn new(
        search: Arc<dyn VideoSearch>,
        store: ScoreStore,
        clock: Arc<dyn Clock>,
        matcher: TitleMatcher,
        channel_id: impl Into<String>,
        recent_limit: u32,
    ) -> Self {
        Self {
            search,
            store: Arc::new(RwLock::new(store)),
            clock,
            matcher,
            channel_id: channel_id.into(),
            recent_limit,
        }
    }

    /// Creates a service from configuration using the system clock.
    pub fn from_config(config: &Config, search: Arc<dyn VideoSearch>) -> Self {
        Self::new(
            search,
            ScoreStore::new(config.freshness_window_secs),
            Arc::new(SystemClock),
            TitleMatcher::new(&config.team_aliases),
            config.channel_id.clone(),
            config.recent_limit,
        )
    }

    /// Shared handle to the cache slot, for stats reporting.
    pub fn store(&self) -> Arc<RwLock<ScoreStore>> {
        self.store.clone()
    }

    pub fn now_ms(&self) -> u64 {
        self.clock.now_ms()
    }

    // == Get Latest Score ==
    /// Returns the current broadcast state of the channel.
    ///
    /// The cache lock is released while the upstream is queried, so two
    /// concurrent refreshes may both hit the upstream; the later write wins.
    pub async fn get_latest_score(&self) -> Result<ScoreResult> {
        let now = self.clock.now_ms();

        let fresh = self.store.read().await.fresh(now);
        if let Some(cached) = fresh {
            debug!("Serving fresh cached result ({:?})", cached.kind());
            return Ok(cached);
        }

        self.store.read().await.record_upstream_lookup();

        match self.lookup_upstream().await {
            Ok(result) => {
                info!(
                    "Score refreshed from {}: {:?}",
                    self.search.name(),
                    result.kind()
                );
                let now = self.clock.now_ms();
                self.store.write().await.store(result.clone(), now);
                Ok(result)
            }
            Err(err) => {
                warn!("Score lookup via {} failed: {}", self.search.name(), err);
                let fallback = self.store.read().await.fallback();
                match fallback {
                    Some(stale) => {
                        warn!("Serving stale cached result ({:?})", stale.kind());
                        Ok(stale)
                    }
                    None => Err(err.into()),
                }
            }
        }
    }

    // == Upstream Lookup ==
    /// Live broadcast first, then the most recent finished club match.
    async fn lookup_upstream(&self) -> std::result::Result<ScoreResult, UpstreamError> {
        let live = self.search.search_live(&self.channel_id).await?;
        if let Some(video) = live.into_iter().next() {
            return Ok(ScoreResult::live(video.title, &video.video_id));
        }

        let recent = self
            .search
            .search_recent(&self.channel_id, self.recent_limit)
            .await?;
        debug!("Scanning {} recent videos for a final score", recent.len());

        let finished = recent.into_iter().find_map(|video| {
            let (home, away) = self.matcher.match_finished(&video.title)?;
            Some(ScoreResult::finished(video.title, home, away, &video.video_id))
        });

        Ok(finished.unwrap_or(ScoreResult::NoMatch))
    }
}
