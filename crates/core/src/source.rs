//! Candidate fetcher contract.
//!
//! The selection engine needs one thing from storage: every row stored for
//! a `(video_id, service)` pair, unfiltered. Implementations live next to
//! their storage (the PostgreSQL one is in the `db` crate).

use async_trait::async_trait;

use crate::error::StorageError;
use crate::segment::Segment;

#[async_trait]
pub trait SegmentSource: Send + Sync {
    /// Return all rows matching `video_id` and `service` exactly.
    async fn fetch(&self, video_id: &str, service: &str) -> Result<Vec<Segment>, StorageError>;

    /// Check that the backing store is reachable.
    async fn ping(&self) -> Result<(), StorageError> {
        Ok(())
    }
}

/// A fixed set of rows held in memory.
///
/// Used for fixtures and tests; returns rows in insertion order.
#[derive(Debug, Clone, Default)]
pub struct MemorySegmentSource {
    segments: Vec<Segment>,
}

impl MemorySegmentSource {
    pub fn new(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    pub fn insert(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

#[async_trait]
impl SegmentSource for MemorySegmentSource {
    async fn fetch(&self, video_id: &str, service: &str) -> Result<Vec<Segment>, StorageError> {
        Ok(self
            .segments
            .iter()
            .filter(|s| s.belongs_to(video_id, service))
            .cloned()
            .collect())
    }
}
