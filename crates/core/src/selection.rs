//! The segment selection pipeline.
//!
//! `normalize → fetch → scope → apply_visibility → resolve_overlaps → format`
//!
//! Only [`find_skip_segments`] touches storage; every other step is a pure
//! function over the fetched snapshot, so requests never interact.

use crate::error::CoreError;
use crate::filter::QueryFilter;
use crate::formatter::{format_results, SegmentResult};
use crate::overlap::{resolve_overlaps, RequiredOverlap, DEFAULT_OVERLAP_TOLERANCE_SECS};
use crate::segment::Segment;
use crate::source::SegmentSource;
use crate::types::Seconds;
use crate::visibility::{apply_visibility, DEFAULT_MIN_VISIBLE_VOTES};

/// Tunables of the selection engine.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionConfig {
    /// Rows with fewer votes are suppressed unless locked or required.
    pub min_visible_votes: i32,
    /// Shared duration that must be exceeded for two rows to compete.
    pub overlap_tolerance_secs: Seconds,
    pub required_overlap: RequiredOverlap,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            min_visible_votes: DEFAULT_MIN_VISIBLE_VOTES,
            overlap_tolerance_secs: DEFAULT_OVERLAP_TOLERANCE_SECS,
            required_overlap: RequiredOverlap::default(),
        }
    }
}

/// Reduce fetched candidates to the rows a client should apply.
pub fn select_segments(
    filter: &QueryFilter,
    candidates: Vec<Segment>,
    config: &SelectionConfig,
) -> Vec<Segment> {
    let scoped: Vec<Segment> = candidates
        .into_iter()
        .filter(|s| filter.admits(s))
        .collect();
    let visible = apply_visibility(filter, scoped, config.min_visible_votes);
    resolve_overlaps(
        filter,
        visible,
        config.overlap_tolerance_secs,
        config.required_overlap,
    )
}

/// Fetch candidates for `filter` and run the full pipeline.
///
/// Returns [`CoreError::NotFound`] when nothing survives and
/// [`CoreError::Storage`] when the source fails.
pub async fn find_skip_segments(
    source: &dyn SegmentSource,
    filter: &QueryFilter,
    config: &SelectionConfig,
) -> Result<Vec<SegmentResult>, CoreError> {
    let candidates = source
        .fetch(&filter.video_id, &filter.service)
        .await
        .map_err(CoreError::Storage)?;
    let candidate_count = candidates.len();

    let survivors = select_segments(filter, candidates, config);

    tracing::debug!(
        video_id = %filter.video_id,
        service = %filter.service,
        candidates = candidate_count,
        survivors = survivors.len(),
        "Selected skip segments",
    );

    format_results(filter, survivors)
}
