//! Query normalization: raw `(key, value)` pairs into a [`QueryFilter`].
//!
//! Every list-valued input has two spellings: a JSON array (`categories`)
//! and a repeatable scalar (`category`). When the array spelling is present
//! it wins and the scalar occurrences are ignored.

use std::collections::BTreeSet;

use crate::error::CoreError;
use crate::segment::Segment;
use crate::service::canonical_service;
use crate::types::SegmentUuid;

// ---------------------------------------------------------------------------
// Parameter names
// ---------------------------------------------------------------------------

pub const PARAM_VIDEO_ID: &str = "videoID";
pub const PARAM_SERVICE: &str = "service";
pub const PARAM_CATEGORY: &str = "category";
pub const PARAM_CATEGORIES: &str = "categories";
pub const PARAM_ACTION_TYPE: &str = "actionType";
pub const PARAM_ACTION_TYPES: &str = "actionTypes";
pub const PARAM_REQUIRED_SEGMENT: &str = "requiredSegment";
pub const PARAM_REQUIRED_SEGMENTS: &str = "requiredSegments";

// ---------------------------------------------------------------------------
// Action types
// ---------------------------------------------------------------------------

pub const ACTION_TYPE_SKIP: &str = "skip";
pub const ACTION_TYPE_MUTE: &str = "mute";

/// Action types applied when the caller names none.
pub const DEFAULT_ACTION_TYPES: &[&str] = &[ACTION_TYPE_SKIP];

// ---------------------------------------------------------------------------
// Filter
// ---------------------------------------------------------------------------

/// Category constraint of a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryScope {
    /// No category parameter was supplied.
    Any,
    /// Only these categories. An explicit empty array matches nothing.
    Only(BTreeSet<String>),
}

impl CategoryScope {
    pub fn allows(&self, category: &str) -> bool {
        match self {
            CategoryScope::Any => true,
            CategoryScope::Only(set) => set.contains(category),
        }
    }
}

/// Fully resolved selection criteria for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryFilter {
    pub video_id: String,
    pub service: String,
    pub categories: CategoryScope,
    pub action_types: BTreeSet<String>,
    pub required_uuids: BTreeSet<SegmentUuid>,
}

impl QueryFilter {
    /// Build a filter from query-string pairs in their original order.
    ///
    /// Fails with [`CoreError::BadRequest`] when `videoID` is missing or blank,
    /// or when an array-valued parameter is not a JSON array of strings.
    /// Unrecognized keys are ignored.
    pub fn from_query_pairs(pairs: &[(String, String)]) -> Result<Self, CoreError> {
        let video_id = first_value(pairs, PARAM_VIDEO_ID)
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| CoreError::BadRequest(format!("{PARAM_VIDEO_ID} is required")))?
            .to_string();

        let service = canonical_service(first_value(pairs, PARAM_SERVICE)).to_string();

        let categories = match resolve_list(pairs, PARAM_CATEGORIES, PARAM_CATEGORY)? {
            Some(set) => CategoryScope::Only(set),
            None => CategoryScope::Any,
        };

        let action_types = resolve_list(pairs, PARAM_ACTION_TYPES, PARAM_ACTION_TYPE)?
            .unwrap_or_else(|| {
                DEFAULT_ACTION_TYPES
                    .iter()
                    .map(|s| s.to_string())
                    .collect()
            });

        let required_uuids =
            resolve_list(pairs, PARAM_REQUIRED_SEGMENTS, PARAM_REQUIRED_SEGMENT)?
                .unwrap_or_default();

        Ok(Self {
            video_id,
            service,
            categories,
            action_types,
            required_uuids,
        })
    }

    /// `true` if the caller explicitly asked for this segment.
    pub fn is_required(&self, uuid: &str) -> bool {
        self.required_uuids.contains(uuid)
    }

    /// `true` if the segment passes the category and action type constraints.
    pub fn matches_scope(&self, segment: &Segment) -> bool {
        self.categories.allows(&segment.category)
            && self.action_types.contains(&segment.action_type)
    }

    /// Whether a fetched row enters selection at all.
    ///
    /// Rows must belong to the requested video. Required rows skip the
    /// category and action type constraints.
    pub fn admits(&self, segment: &Segment) -> bool {
        segment.belongs_to(&self.video_id, &self.service)
            && (self.is_required(&segment.uuid) || self.matches_scope(segment))
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn first_value<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

/// Resolve one list-valued input from its array and repeated spellings.
///
/// Returns `None` when neither spelling occurs.
fn resolve_list(
    pairs: &[(String, String)],
    array_key: &str,
    single_key: &str,
) -> Result<Option<BTreeSet<String>>, CoreError> {
    if let Some(raw) = first_value(pairs, array_key) {
        let values: Vec<String> = serde_json::from_str(raw).map_err(|e| {
            CoreError::BadRequest(format!(
                "{array_key} must be a JSON array of strings: {e}"
            ))
        })?;
        return Ok(Some(values.into_iter().collect()));
    }

    let values: BTreeSet<String> = pairs
        .iter()
        .filter(|(k, _)| k == single_key)
        .map(|(_, v)| v.clone())
        .collect();

    Ok((!values.is_empty()).then_some(values))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
