//! Overlap resolution within a category.
//!
//! Rows of the same category whose time ranges overlap are treated as
//! competing submissions for one real-world region. Each region keeps a
//! single winner; required rows never lose.
//!
//! The algorithm buckets row indices by category, sorts each bucket by start
//! time and sweeps it once. A row joins the still-open group it shares more
//! than the tolerance with, otherwise it opens a new group. Because starts
//! are ascending, a row can exceed the tolerance against at most one open
//! group.

use std::cmp::Ordering;
use std::str::FromStr;

use crate::filter::QueryFilter;
use crate::segment::Segment;
use crate::types::Seconds;

/// Shared duration (seconds) that must be exceeded for two rows to overlap.
pub const DEFAULT_OVERLAP_TOLERANCE_SECS: Seconds = 0.0;

/// How required rows interact with the winner of their overlap group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequiredOverlap {
    /// Required rows are kept alongside the group winner.
    #[default]
    Additive,
    /// A group containing required rows yields only those rows.
    Exclusive,
}

impl FromStr for RequiredOverlap {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "additive" => Ok(Self::Additive),
            "exclusive" => Ok(Self::Exclusive),
            other => Err(format!(
                "Invalid required overlap mode '{other}'. Must be one of: additive, exclusive"
            )),
        }
    }
}

/// Winner ordering: locked first, then more votes, then earlier submission,
/// then smaller UUID. `Ordering::Less` means `a` beats `b`.
pub fn compare_priority(a: &Segment, b: &Segment) -> Ordering {
    b.locked
        .cmp(&a.locked)
        .then_with(|| b.votes.cmp(&a.votes))
        .then_with(|| a.time_submitted.cmp(&b.time_submitted))
        .then_with(|| a.uuid.cmp(&b.uuid))
}

/// Collapse overlapping rows per category, returning survivors in input order.
pub fn resolve_overlaps(
    filter: &QueryFilter,
    segments: Vec<Segment>,
    tolerance: Seconds,
    mode: RequiredOverlap,
) -> Vec<Segment> {
    let mut keep = vec![false; segments.len()];

    for bucket in category_buckets(&segments) {
        for group in overlap_groups(&segments, bucket, tolerance) {
            for idx in group_survivors(&segments, &group, filter, mode) {
                keep[idx] = true;
            }
        }
    }

    segments
        .into_iter()
        .zip(keep)
        .filter_map(|(segment, kept)| kept.then_some(segment))
        .collect()
}

/// Row indices grouped by category, categories in order of first appearance.
fn category_buckets(segments: &[Segment]) -> Vec<Vec<usize>> {
    let mut names: Vec<&str> = Vec::new();
    let mut buckets: Vec<Vec<usize>> = Vec::new();

    for (idx, segment) in segments.iter().enumerate() {
        match names.iter().position(|n| *n == segment.category) {
            Some(pos) => buckets[pos].push(idx),
            None => {
                names.push(&segment.category);
                buckets.push(vec![idx]);
            }
        }
    }

    buckets
}

/// Split one category bucket into transitive overlap groups.
fn overlap_groups(
    segments: &[Segment],
    mut bucket: Vec<usize>,
    tolerance: Seconds,
) -> Vec<Vec<usize>> {
    bucket.sort_by(|&a, &b| {
        segments[a]
            .start_time
            .total_cmp(&segments[b].start_time)
            .then_with(|| segments[a].end_time.total_cmp(&segments[b].end_time))
    });

    let mut groups: Vec<Vec<usize>> = Vec::new();
    // (group index, furthest end reached by that group)
    let mut open: Vec<(usize, Seconds)> = Vec::new();

    for idx in bucket {
        let segment = &segments[idx];
        open.retain(|&(_, end)| end > segment.start_time);

        let joined = open
            .iter_mut()
            .find(|(_, end)| shared_duration(segment, *end) > tolerance);

        match joined {
            Some((group, end)) => {
                groups[*group].push(idx);
                *end = end.max(segment.end_time);
            }
            None => {
                open.push((groups.len(), segment.end_time));
                groups.push(vec![idx]);
            }
        }
    }

    groups
}

/// Seconds of `segment` that fall before `group_end`.
///
/// Rows are swept in start order, so this is the duration the row shares
/// with a group whose furthest end is `group_end`.
fn shared_duration(segment: &Segment, group_end: Seconds) -> Seconds {
    segment.end_time.min(group_end) - segment.start_time
}

fn group_survivors(
    segments: &[Segment],
    group: &[usize],
    filter: &QueryFilter,
    mode: RequiredOverlap,
) -> Vec<usize> {
    let mut survivors: Vec<usize> = group
        .iter()
        .copied()
        .filter(|&idx| filter.is_required(&segments[idx].uuid))
        .collect();

    if mode == RequiredOverlap::Exclusive && !survivors.is_empty() {
        return survivors;
    }

    let winner = group
        .iter()
        .copied()
        .min_by(|&a, &b| compare_priority(&segments[a], &segments[b]));

    if let Some(winner) = winner {
        if !survivors.contains(&winner) {
            survivors.push(winner);
        }
    }

    survivors
}
