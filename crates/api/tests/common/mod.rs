use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use chrono::{TimeZone, Utc};
use http_body_util::BodyExt;
use tower::ServiceExt;

use skipsegments_api::config::ServerConfig;
use skipsegments_api::router::build_app_router;
use skipsegments_api::state::AppState;
use skipsegments_core::segment::Segment;
use skipsegments_core::selection::SelectionConfig;
use skipsegments_core::source::{MemorySegmentSource, SegmentSource};

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        db_max_connections: 5,
        selection: SelectionConfig::default(),
    }
}

/// Build the full application router over `source` with the default config.
pub fn build_test_app(source: impl SegmentSource + 'static) -> Router {
    build_test_app_with_config(source, test_config())
}

/// Build the full application router over `source`.
///
/// Uses the same builder as `main.rs`, so tests exercise the production
/// middleware stack (CORS, request ID, timeout, tracing, panic recovery).
pub fn build_test_app_with_config(
    source: impl SegmentSource + 'static,
    config: ServerConfig,
) -> Router {
    let state = AppState {
        source: Arc::new(source),
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Send a GET request through the router.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Form-encode `(key, value)` pairs into a query string, keeping order and
/// repeated keys.
pub fn query_string(params: &[(&str, &str)]) -> String {
    serde_urlencoded::to_string(params).expect("query params should encode")
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Row builder with the fields the fixture table varies.
#[allow(clippy::too_many_arguments)]
pub fn row(
    video_id: &str,
    start: f64,
    end: f64,
    votes: i32,
    locked: bool,
    uuid: &str,
    category: &str,
    action_type: &str,
    service: &str,
    video_duration: f64,
    hidden: bool,
) -> Segment {
    Segment {
        uuid: uuid.to_string(),
        video_id: video_id.to_string(),
        service: service.to_string(),
        start_time: start,
        end_time: end,
        category: category.to_string(),
        action_type: action_type.to_string(),
        votes,
        locked,
        hidden,
        shadow_hidden: false,
        video_duration,
        user_id: "testman".to_string(),
        time_submitted: Utc.timestamp_millis_opt(0).unwrap(),
        views: 50,
        description: String::new(),
    }
}

/// The shared fixture table used by the lookup tests.
pub fn fixture_source() -> MemorySegmentSource {
    let yt = "YouTube";
    let mut shadow = row("video-shadow", 5.0, 9.0, 10, false, "uuid70", "sponsor", "skip", yt, 90.0, false);
    shadow.shadow_hidden = true;

    MemorySegmentSource::new(vec![
        row("video-a", 1.0, 11.0, 2, false, "uuid01", "sponsor", "skip", yt, 100.0, false),
        row("video-a", 12.0, 14.0, 2, false, "uuid02", "sponsor", "mute", yt, 100.0, false),
        row("video-a", 20.0, 33.0, 2, false, "uuid03", "intro", "skip", yt, 101.0, false),
        row("video-pt", 1.0, 11.0, 2, false, "uuid10", "sponsor", "skip", "PeerTube", 120.0, false),
        row("video-b", 1.0, 11.0, 2, false, "uuid20", "sponsor", "skip", yt, 140.0, false),
        row("video-low", 1.0, 11.0, 2, false, "uuid30", "sponsor", "skip", yt, 200.0, false),
        row("video-low", 7.0, 22.0, -3, false, "uuid31", "sponsor", "skip", yt, 300.0, false),
        row("video-multi", 1.0, 11.0, 2, false, "uuid40", "intro", "skip", yt, 400.0, false),
        row("video-multi", 20.0, 33.0, 2, false, "uuid41", "intro", "skip", yt, 500.0, false),
        row("video-locked", 20.0, 33.0, 2, true, "uuid50", "intro", "skip", yt, 230.0, false),
        row("video-locked", 20.0, 34.0, 100_000, false, "uuid51", "intro", "skip", yt, 190.0, false),
        row("video-hidden", 20.0, 34.0, 100_000, false, "uuid60", "sponsor", "skip", yt, 190.0, true),
        shadow,
        row("video-odd", 1.0, 5.0, 2, false, "uuid80", "sponsor & promo+ad", "skip", yt, 60.0, false),
        row("video-odd", 8.0, 9.0, 2, false, "uuid81", "intro", "skip", yt, 60.0, false),
        row("video-req", 60.0, 70.0, 2, false, "req1", "sponsor", "skip", yt, 0.0, false),
        row("video-req", 60.0, 70.0, -2, false, "req2", "sponsor", "skip", yt, 0.0, false),
        row("video-req", 80.0, 90.0, -2, false, "req3", "sponsor", "skip", yt, 0.0, false),
        row("video-req", 80.0, 90.0, 2, false, "req4", "sponsor", "skip", yt, 0.0, false),
    ])
}
