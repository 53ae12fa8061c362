//! [`SegmentSource`] backed by the `sponsor_times` table.

use async_trait::async_trait;
use skipsegments_core::error::StorageError;
use skipsegments_core::segment::Segment;
use skipsegments_core::source::SegmentSource;

use crate::repositories::SponsorTimeRepo;
use crate::DbPool;

/// Fetches candidates with a single indexed query per request.
#[derive(Debug, Clone)]
pub struct PgSegmentSource {
    pool: DbPool,
}

impl PgSegmentSource {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SegmentSource for PgSegmentSource {
    async fn fetch(&self, video_id: &str, service: &str) -> Result<Vec<Segment>, StorageError> {
        let rows = SponsorTimeRepo::list_by_video(&self.pool, video_id, service).await?;
        tracing::trace!(video_id, service, rows = rows.len(), "Fetched candidate rows");
        Ok(rows.into_iter().map(Segment::from).collect())
    }

    async fn ping(&self) -> Result<(), StorageError> {
        crate::health_check(&self.pool).await?;
        Ok(())
    }
}
