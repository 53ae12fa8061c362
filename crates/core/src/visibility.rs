//! Visibility policy: moderation flags and low-vote suppression.
//!
//! Pure logic over already-fetched rows. Moderation (`hidden`,
//! `shadowHidden`) has no override. Vote suppression is waived for locked
//! rows and for rows the caller explicitly required.

use crate::filter::QueryFilter;
use crate::segment::Segment;

/// Lowest vote total that is still shown by default.
///
/// Rows with `votes < DEFAULT_MIN_VISIBLE_VOTES` are suppressed.
pub const DEFAULT_MIN_VISIBLE_VOTES: i32 = -1;

/// Outcome of evaluating one row against the policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Visible,
    /// Removed by `hidden` or `shadowHidden`.
    Moderated,
    /// Removed for falling below the vote threshold.
    LowVotes,
}

/// Decide whether `segment` is visible for `filter`.
pub fn evaluate(segment: &Segment, filter: &QueryFilter, min_visible_votes: i32) -> Visibility {
    if segment.is_moderated_out() {
        return Visibility::Moderated;
    }

    let exempt = segment.locked || filter.is_required(&segment.uuid);
    if segment.votes < min_visible_votes && !exempt {
        return Visibility::LowVotes;
    }

    Visibility::Visible
}

/// Keep only the visible rows, preserving order.
pub fn apply_visibility(
    filter: &QueryFilter,
    segments: Vec<Segment>,
    min_visible_votes: i32,
) -> Vec<Segment> {
    let before = segments.len();
    let mut moderated = 0usize;
    let mut low_votes = 0usize;

    let visible: Vec<Segment> = segments
        .into_iter()
        .filter(|s| match evaluate(s, filter, min_visible_votes) {
            Visibility::Visible => true,
            Visibility::Moderated => {
                moderated += 1;
                false
            }
            Visibility::LowVotes => {
                low_votes += 1;
                false
            }
        })
        .collect();

    tracing::trace!(
        video_id = %filter.video_id,
        before,
        moderated,
        low_votes,
        "Applied visibility policy",
    );

    visible
}
