//! Error types for the score lookup service
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Upstream Error Enum ==
/// Failure talking to the video-search API.
#[derive(Error, Debug)]
pub enum UpstreamError {
    /// Network failure, timeout, or non-success status
    #[error("video search unavailable: {0}")]
    Unavailable(String),

    /// Response body did not have the expected shape
    #[error("malformed video search response: {0}")]
    Malformed(String),
}

impl From<reqwest::Error> for UpstreamError {
    /// Drops the request URL from the message; it may carry credentials.
    fn from(err: reqwest::Error) -> Self {
        let malformed = err.is_decode();
        let message = err.without_url().to_string();
        if malformed {
            UpstreamError::Malformed(message)
        } else {
            UpstreamError::Unavailable(message)
        }
    }
}

// == Lookup Error Enum ==
/// Failure surfaced by a score lookup when no fallback could be served.
#[derive(Error, Debug)]
pub enum LookupError {
    /// Upstream failed and the cache held nothing usable
    #[error("upstream unavailable: {0}")]
    UpstreamUnavailable(#[from] UpstreamError),
}

// == IntoResponse Implementation ==
impl IntoResponse for LookupError {
    fn into_response(self) -> Response {
        let (status, error, detail) = match self {
            LookupError::UpstreamUnavailable(source) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to fetch live score",
                source.to_string(),
            ),
        };

        (status, Json(ErrorResponse::new(error, detail))).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for score lookups.
pub type Result<T> = std::result::Result<T, LookupError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_error_wraps_upstream() {
        let err: LookupError = UpstreamError::Malformed("missing items".into()).into();
        assert_eq!(
            err.to_string(),
            "upstream unavailable: malformed video search response: missing items"
        );
    }

    #[tokio::test]
    async fn test_into_response_shape() {
        let err = LookupError::UpstreamUnavailable(UpstreamError::Unavailable(
            "status 403 Forbidden: quotaExceeded".into(),
        ));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["error"], "Failed to fetch live score");
        assert!(json["detail"].as_str().unwrap().contains("quotaExceeded"));
    }
}
