//! Route definitions for skip segment lookup.
//!
//! ```text
//! GET  /skipSegments        get_skip_segments
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::skip_segments;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/skipSegments", get(skip_segments::get_skip_segments))
}
