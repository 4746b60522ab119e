//! Configuration Module
//!
//! Handles loading and validating service configuration from environment
//! variables. Values are read once at startup.

use std::env;
use std::time::Duration;

use crate::cache::DEFAULT_FRESHNESS_WINDOW_SECS;
use crate::score::DEFAULT_ALIASES;
use crate::upstream::DEFAULT_API_URL;

/// Service configuration parameters.
#[derive(Debug, Clone)]
pub struct Config {
    /// Video-search API key
    pub api_key: String,
    /// Channel whose broadcasts are looked up
    pub channel_id: String,
    /// Video-search API base URL
    pub api_url: String,
    /// HTTP server port
    pub server_port: u16,
    /// Freshness window of the cached result, in seconds
    pub freshness_window_secs: u64,
    /// Number of recent videos scanned for a final score
    pub recent_limit: u32,
    /// Upstream request timeout in seconds
    pub request_timeout_secs: u64,
    /// Case-insensitive team name variants matched in titles
    pub team_aliases: Vec<String>,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `YOUTUBE_API_KEY` - API key (required, see [`Config::validate`])
    /// - `YOUTUBE_CHANNEL_ID` - Channel id (required)
    /// - `YOUTUBE_API_URL` - API base URL (default: YouTube Data API v3)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `FRESHNESS_WINDOW_SECS` - Cache freshness window (default: 600)
    /// - `RECENT_LIMIT` - Recent videos scanned (default: 10)
    /// - `REQUEST_TIMEOUT_SECS` - Upstream timeout (default: 10)
    /// - `TEAM_ALIASES` - Comma-separated aliases (default: `файна,fayna`)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_key: env::var("YOUTUBE_API_KEY").unwrap_or_default(),
            channel_id: env::var("YOUTUBE_CHANNEL_ID").unwrap_or_default(),
            api_url: env::var("YOUTUBE_API_URL").unwrap_or(defaults.api_url),
            server_port: parse_var("SERVER_PORT").unwrap_or(defaults.server_port),
            freshness_window_secs: parse_var("FRESHNESS_WINDOW_SECS")
                .unwrap_or(defaults.freshness_window_secs),
            recent_limit: parse_var("RECENT_LIMIT").unwrap_or(defaults.recent_limit),
            request_timeout_secs: parse_var("REQUEST_TIMEOUT_SECS")
                .unwrap_or(defaults.request_timeout_secs),
            team_aliases: env::var("TEAM_ALIASES")
                .ok()
                .map(|v| parse_aliases(&v))
                .filter(|aliases| !aliases.is_empty())
                .unwrap_or(defaults.team_aliases),
        }
    }

    /// Checks that required values are present and ranges are sane.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.api_key.trim().is_empty() {
            anyhow::bail!("YOUTUBE_API_KEY is required");
        }
        if self.channel_id.trim().is_empty() {
            anyhow::bail!("YOUTUBE_CHANNEL_ID is required");
        }
        if self.freshness_window_secs == 0 {
            anyhow::bail!("FRESHNESS_WINDOW_SECS must be positive");
        }
        // The search endpoint caps maxResults at 50
        if !(1..=50).contains(&self.recent_limit) {
            anyhow::bail!("RECENT_LIMIT must be between 1 and 50");
        }
        if self.request_timeout_secs == 0 {
            anyhow::bail!("REQUEST_TIMEOUT_SECS must be positive");
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            channel_id: String::new(),
            api_url: DEFAULT_API_URL.to_string(),
            server_port: 3000,
            freshness_window_secs: DEFAULT_FRESHNESS_WINDOW_SECS,
            recent_limit: 10,
            request_timeout_secs: 10,
            team_aliases: DEFAULT_ALIASES.iter().map(|a| a.to_string()).collect(),
        }
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}

/// Splits a comma-separated alias list, dropping blanks.
fn parse_aliases(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|a| !a.is_empty())
        .map(str::to_string)
        .collect()
}
