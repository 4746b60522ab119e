//! Score Result Module
//!
//! Defines the outcome of a lookup and its JSON wire shape.

use serde::{Deserialize, Serialize};

/// Base URL for watch links built from a video id.
const WATCH_URL_PREFIX: &str = "https://www.youtube.com/watch?v=";

// == Score Result ==
/// Current state of the channel's broadcast.
///
/// Serialized with a `status` tag:
/// - `{"status":"live","title":..,"url":..}`
/// - `{"status":"finished","title":..,"homeScore":..,"awayScore":..,"url":..}`
/// - `{"status":"no-match"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum ScoreResult {
    /// A broadcast is live right now
    Live {
        title: String,
        #[serde(rename = "url")]
        watch_url: String,
    },
    /// A recent video announces a final score in its title
    Finished {
        title: String,
        #[serde(rename = "homeScore")]
        home_score: u32,
        #[serde(rename = "awayScore")]
        away_score: u32,
        #[serde(rename = "url")]
        watch_url: String,
    },
    /// Nothing relevant on the channel
    NoMatch,
}

/// Discriminant of a [`ScoreResult`], used for logging and stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreKind {
    Live,
    Finished,
    NoMatch,
}

impl ScoreResult {
    // == Constructors ==
    /// Builds a live result for the given video.
    pub fn live(title: impl Into<String>, video_id: &str) -> Self {
        ScoreResult::Live {
            title: title.into(),
            watch_url: watch_url(video_id),
        }
    }

    /// Builds a finished result for the given video.
    pub fn finished(
        title: impl Into<String>,
        home_score: u32,
        away_score: u32,
        video_id: &str,
    ) -> Self {
        ScoreResult::Finished {
            title: title.into(),
            home_score,
            away_score,
            watch_url: watch_url(video_id),
        }
    }

    pub fn kind(&self) -> ScoreKind {
        match self {
            ScoreResult::Live { .. } => ScoreKind::Live,
            ScoreResult::Finished { .. } => ScoreKind::Finished,
            ScoreResult::NoMatch => ScoreKind::NoMatch,
        }
    }

    pub fn is_no_match(&self) -> bool {
        matches!(self, ScoreResult::NoMatch)
    }
}

/// Returns the public watch URL for a video id.
pub fn watch_url(video_id: &str) -> String {
    format!("{}{}", WATCH_URL_PREFIX, video_id)
}
