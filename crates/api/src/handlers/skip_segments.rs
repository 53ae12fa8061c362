//! Handler for the skip segment lookup.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;
use skipsegments_core::filter::QueryFilter;
use skipsegments_core::formatter::SegmentResult;
use skipsegments_core::selection::find_skip_segments;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/skipSegments
///
/// Query pairs are taken in their original order so repeated keys
/// (`category=a&category=b`) are preserved for the normalizer.
pub async fn get_skip_segments(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> AppResult<Json<Vec<SegmentResult>>> {
    let Query(pairs) = query?;
    let filter = QueryFilter::from_query_pairs(&pairs)?;

    let results =
        find_skip_segments(state.source.as_ref(), &filter, &state.config.selection).await?;
    Ok(Json(results))
}
