pub mod health;
pub mod skip_segments;

use axum::Router;

use crate::state::AppState;

/// Build the API route tree.
///
/// Mounted at both `/api` (the path existing clients use) and `/api/v1`.
///
/// ```text
/// /skipSegments                                    selection lookup (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(skip_segments::router())
}
