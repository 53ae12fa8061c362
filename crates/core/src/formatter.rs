//! Response shaping for selected segments.

use std::collections::HashMap;

use serde::Serialize;

use crate::error::CoreError;
use crate::filter::QueryFilter;
use crate::segment::Segment;
use crate::types::{SegmentUuid, Seconds};

/// One entry of the client-facing result array.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentResult {
    /// `[startTime, endTime]`.
    pub segment: [Seconds; 2],
    pub category: String,
    pub action_type: String,
    #[serde(rename = "UUID")]
    pub uuid: SegmentUuid,
    pub video_duration: Seconds,
    pub locked: bool,
    pub votes: i32,
    #[serde(rename = "userID")]
    pub user_id: String,
    pub description: String,
}

impl From<Segment> for SegmentResult {
    fn from(s: Segment) -> Self {
        Self {
            segment: [s.start_time, s.end_time],
            category: s.category,
            action_type: s.action_type,
            uuid: s.uuid,
            video_duration: s.video_duration,
            locked: s.locked,
            votes: s.votes,
            user_id: s.user_id,
            description: s.description,
        }
    }
}

/// Turn survivors into response entries, or signal not-found when empty.
///
/// Entries are grouped by category. Categories are ordered by their earliest
/// start time (then name); entries within a category by start, end, UUID.
pub fn format_results(
    filter: &QueryFilter,
    mut survivors: Vec<Segment>,
) -> Result<Vec<SegmentResult>, CoreError> {
    if survivors.is_empty() {
        return Err(CoreError::NotFound {
            entity: "Segments",
            id: filter.video_id.clone(),
        });
    }

    let mut first_start: HashMap<String, Seconds> = HashMap::new();
    for s in &survivors {
        first_start
            .entry(s.category.clone())
            .and_modify(|t| *t = t.min(s.start_time))
            .or_insert(s.start_time);
    }

    survivors.sort_by(|a, b| {
        first_start[&a.category]
            .total_cmp(&first_start[&b.category])
            .then_with(|| a.category.cmp(&b.category))
            .then_with(|| a.start_time.total_cmp(&b.start_time))
            .then_with(|| a.end_time.total_cmp(&b.end_time))
            .then_with(|| a.uuid.cmp(&b.uuid))
    });

    Ok(survivors.into_iter().map(SegmentResult::from).collect())
}
