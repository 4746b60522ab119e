use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use super::{VideoItem, VideoSearch};
use crate::error::UpstreamError;

/// YouTube Data API v3 base URL.
pub const DEFAULT_API_URL: &str = "https://www.googleapis.com/youtube/v3";

/// Header carrying the API key, which keeps it out of request URLs.
const API_KEY_HEADER: &str = "X-Goog-Api-Key";

/// Longest slice of an error body kept in messages.
const ERROR_BODY_LIMIT: usize = 200;

/// Video search backed by the YouTube Data API `search` endpoint.
///
/// Each call costs quota, which is why the lookup service caches results.
#[derive(Clone)]
pub struct YouTubeClient {
    http: Client,
    api_key: String,
    /// Base URL for overriding in tests
    base_url: String,
}

impl YouTubeClient {
    pub fn new(
        api_key: impl Into<String>,
        base_url: Option<&str>,
        timeout: Duration,
    ) -> Result<Self, UpstreamError> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(YouTubeClient {
            http,
            api_key: api_key.into(),
            base_url: base_url
                .unwrap_or(DEFAULT_API_URL)
                .trim_end_matches('/')
                .to_string(),
        })
    }

    async fn search(&self, params: &[(&str, String)]) -> Result<Vec<VideoItem>, UpstreamError> {
        let url = format!("{}/search", self.base_url);
        debug!("Searching videos: {} {:?}", url, params);

        let resp = self
            .http
            .get(&url)
            .header(API_KEY_HEADER, self.api_key.as_str())
            .query(&[("part", "snippet"), ("type", "video")])
            .query(params)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            let snippet: String = body.chars().take(ERROR_BODY_LIMIT).collect();
            return Err(UpstreamError::Unavailable(format!(
                "status {}: {}",
                status, snippet
            )));
        }

        let body = resp.text().await?;
        parse_search_response(&body)
    }
}

#[async_trait]
impl VideoSearch for YouTubeClient {
    async fn search_live(&self, channel_id: &str) -> Result<Vec<VideoItem>, UpstreamError> {
        self.search(&[
            ("channelId", channel_id.to_string()),
            ("eventType", "live".to_string()),
        ])
        .await
    }

    async fn search_recent(
        &self,
        channel_id: &str,
        limit: u32,
    ) -> Result<Vec<VideoItem>, UpstreamError> {
        self.search(&[
            ("channelId", channel_id.to_string()),
            ("order", "date".to_string()),
            ("maxResults", limit.to_string()),
        ])
        .await
    }

    fn name(&self) -> &str {
        "YouTube"
    }
}

// == Wire Format ==
#[derive(Debug, Deserialize)]
struct SearchResponse {
    items: Option<Vec<SearchItem>>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    id: Option<ItemId>,
    snippet: Option<Snippet>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ItemId {
    video_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Snippet {
    title: Option<String>,
    channel_id: Option<String>,
}

/// Parses a `search` response body into video items, preserving order.
///
/// Fails when the body is not JSON, lacks `items`, or an item lacks its video
/// id or title.
pub fn parse_search_response(body: &str) -> Result<Vec<VideoItem>, UpstreamError> {
    let raw: SearchResponse = serde_json::from_str(body)
        .map_err(|e| UpstreamError::Malformed(format!("invalid JSON: {}", e)))?;

    let items = raw
        .items
        .ok_or_else(|| UpstreamError::Malformed("missing `items`".to_string()))?;

    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| {
            let video_id = item
                .id
                .and_then(|id| id.video_id)
                .ok_or_else(|| UpstreamError::Malformed(format!("item {} has no video id", i)))?;
            let snippet = item
                .snippet
                .ok_or_else(|| UpstreamError::Malformed(format!("item {} has no snippet", i)))?;
            let title = snippet
                .title
                .ok_or_else(|| UpstreamError::Malformed(format!("item {} has no title", i)))?;

            Ok(VideoItem {
                video_id,
                title,
                channel_id: snippet.channel_id,
            })
        })
        .collect()
}
