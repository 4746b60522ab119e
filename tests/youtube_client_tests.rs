//! Integration Tests for the YouTube Client
//!
//! Runs the client against a fake search endpoint served locally by axum.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    body::Body,
    extract::{Query, State},
    http::{HeaderMap, Request, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use score_lookup::{
    api::create_router,
    cache::{ManualClock, ScoreStore},
    error::UpstreamError,
    score::{ScoreResult, TitleMatcher},
    upstream::{VideoSearch, YouTubeClient},
    AppState, ScoreLookupService,
};
use serde_json::{json, Value};
use tower::ServiceExt;

const API_KEY: &str = "test-key-5ecret";

// == Fake Upstream ==

#[derive(Clone, Default)]
struct FakeYouTube {
    /// Query strings received, in order
    seen: Arc<Mutex<Vec<HashMap<String, String>>>>,
    /// API key headers received, in order
    keys: Arc<Mutex<Vec<Option<String>>>>,
    /// Forced failure status, if any
    fail_with: Option<StatusCode>,
    live: Value,
    recent: Value,
    delay: Option<Duration>,
}

async fn search(
    State(fake): State<FakeYouTube>,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> impl IntoResponse {
    fake.seen.lock().unwrap().push(params.clone());
    let key = headers
        .get("x-goog-api-key")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    fake.keys.lock().unwrap().push(key);

    if let Some(delay) = fake.delay {
        tokio::time::sleep(delay).await;
    }
    if let Some(status) = fake.fail_with {
        return (
            status,
            Json(json!({ "error": { "code": status.as_u16(), "message": "quotaExceeded" } })),
        );
    }

    let body = if params.get("eventType").map(String::as_str) == Some("live") {
        fake.live.clone()
    } else {
        fake.recent.clone()
    };
    (StatusCode::OK, Json(body))
}

async fn spawn_fake(fake: FakeYouTube) -> SocketAddr {
    let app = Router::new().route("/search", get(search)).with_state(fake);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn client_for(addr: SocketAddr, timeout: Duration) -> YouTubeClient {
    YouTubeClient::new(API_KEY, Some(format!("http://{}", addr).as_str()), timeout).unwrap()
}

fn items(videos: &[(&str, &str)]) -> Value {
    let items: Vec<Value> = videos
        .iter()
        .map(|(id, title)| {
            json!({
                "id": { "kind": "youtube#video", "videoId": id },
                "snippet": { "title": title, "channelId": "UC_fayna" }
            })
        })
        .collect();
    json!({ "kind": "youtube#searchListResponse", "items": items })
}

// == Client Tests ==

#[tokio::test]
async fn test_search_live_sends_live_filter() {
    let fake = FakeYouTube {
        live: items(&[("l1", "Fayna LIVE")]),
        ..FakeYouTube::default()
    };
    let seen = fake.seen.clone();
    let keys = fake.keys.clone();
    let addr = spawn_fake(fake).await;

    let videos = client_for(addr, Duration::from_secs(5))
        .search_live("UC_fayna")
        .await
        .unwrap();

    assert_eq!(videos.len(), 1);
    assert_eq!(videos[0].video_id, "l1");
    assert_eq!(videos[0].channel_id.as_deref(), Some("UC_fayna"));

    let seen = seen.lock().unwrap();
    let params = &seen[0];
    assert_eq!(params["channelId"], "UC_fayna");
    assert_eq!(params["eventType"], "live");
    assert_eq!(params["type"], "video");
    assert_eq!(params["part"], "snippet");
    assert!(!params.contains_key("key"));
    assert_eq!(keys.lock().unwrap()[0].as_deref(), Some(API_KEY));
}

#[tokio::test]
async fn test_search_recent_orders_by_date() {
    let fake = FakeYouTube {
        recent: items(&[("r1", "Fayna 3:1"), ("r2", "Older")]),
        ..FakeYouTube::default()
    };
    let seen = fake.seen.clone();
    let addr = spawn_fake(fake).await;

    let videos = client_for(addr, Duration::from_secs(5))
        .search_recent("UC_fayna", 10)
        .await
        .unwrap();

    assert_eq!(videos.len(), 2);
    assert_eq!(videos[1].title, "Older");

    let seen = seen.lock().unwrap();
    assert_eq!(seen[0]["order"], "date");
    assert_eq!(seen[0]["maxResults"], "10");
    assert!(!seen[0].contains_key("eventType"));
}

#[tokio::test]
async fn test_quota_error_is_unavailable() {
    let fake = FakeYouTube {
        fail_with: Some(StatusCode::FORBIDDEN),
        ..FakeYouTube::default()
    };
    let addr = spawn_fake(fake).await;

    let err = client_for(addr, Duration::from_secs(5))
        .search_live("UC_fayna")
        .await
        .unwrap_err();

    match err {
        UpstreamError::Unavailable(msg) => {
            assert!(msg.contains("403"));
            assert!(msg.contains("quotaExceeded"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_unexpected_shape_is_malformed() {
    let fake = FakeYouTube {
        live: json!({ "kind": "youtube#searchListResponse" }),
        ..FakeYouTube::default()
    };
    let addr = spawn_fake(fake).await;

    let err = client_for(addr, Duration::from_secs(5))
        .search_live("UC_fayna")
        .await
        .unwrap_err();

    assert!(matches!(err, UpstreamError::Malformed(_)));
}

#[tokio::test]
async fn test_timeout_is_unavailable() {
    let fake = FakeYouTube {
        live: items(&[]),
        delay: Some(Duration::from_millis(500)),
        ..FakeYouTube::default()
    };
    let addr = spawn_fake(fake).await;

    let err = client_for(addr, Duration::from_millis(100))
        .search_live("UC_fayna")
        .await
        .unwrap_err();

    assert!(matches!(err, UpstreamError::Unavailable(_)));
    assert!(!err.to_string().contains(API_KEY));
}

#[tokio::test]
async fn test_connection_refused_is_unavailable() {
    // Bind then drop to get a port with nothing listening.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = client_for(addr, Duration::from_secs(1))
        .search_live("UC_fayna")
        .await
        .unwrap_err();

    assert!(matches!(err, UpstreamError::Unavailable(_)));
    assert!(!err.to_string().contains(API_KEY));
}

#[tokio::test]
async fn test_error_body_never_exposes_api_key() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let lookup = ScoreLookupService::new(
        Arc::new(client_for(addr, Duration::from_secs(1))),
        ScoreStore::new(600),
        Arc::new(ManualClock::new(0)),
        TitleMatcher::default(),
        "UC_fayna",
        10,
    );
    let app = create_router(AppState::new(lookup));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/score")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(body.contains("video search unavailable"));
    assert!(!body.contains(API_KEY));
}

// == End-to-End Lookup ==

#[tokio::test]
async fn test_lookup_over_http_finds_finished_match() {
    let fake = FakeYouTube {
        live: items(&[]),
        recent: items(&[
            ("a", "Behind the scenes"),
            ("b", "Fayna Team 4 - 4 Lions"),
        ]),
        ..FakeYouTube::default()
    };
    let seen = fake.seen.clone();
    let addr = spawn_fake(fake).await;

    let lookup = ScoreLookupService::new(
        Arc::new(client_for(addr, Duration::from_secs(5))),
        ScoreStore::new(600),
        Arc::new(ManualClock::new(0)),
        TitleMatcher::default(),
        "UC_fayna",
        10,
    );

    let first = lookup.get_latest_score().await.unwrap();
    let second = lookup.get_latest_score().await.unwrap();

    assert_eq!(first, ScoreResult::finished("Fayna Team 4 - 4 Lions", 4, 4, "b"));
    assert_eq!(second, first);
    assert_eq!(seen.lock().unwrap().len(), 2);
}
