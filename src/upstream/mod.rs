//! Upstream Module
//!
//! The video-search collaborator consulted on a cache miss.

mod youtube;

pub use youtube::{parse_search_response, YouTubeClient, DEFAULT_API_URL};

use async_trait::async_trait;

use crate::error::UpstreamError;

/// One search hit from the video platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoItem {
    pub video_id: String,
    pub title: String,
    pub channel_id: Option<String>,
}

impl VideoItem {
    pub fn new(video_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            video_id: video_id.into(),
            title: title.into(),
            channel_id: None,
        }
    }
}

/// Search operations the lookup needs from the video platform.
#[async_trait]
pub trait VideoSearch: Send + Sync {
    /// Videos on the channel currently flagged as live broadcasts.
    async fn search_live(&self, channel_id: &str) -> Result<Vec<VideoItem>, UpstreamError>;

    /// The channel's most recent videos, newest first, at most `limit`.
    async fn search_recent(
        &self,
        channel_id: &str,
        limit: u32,
    ) -> Result<Vec<VideoItem>, UpstreamError>;

    /// Human-readable name for logging.
    fn name(&self) -> &str;
}
