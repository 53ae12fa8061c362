//! Repository for the `sponsor_times` table.

use sqlx::PgPool;

use crate::models::sponsor_time::{CreateSponsorTime, SponsorTime};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, uuid, video_id, service, start_time, end_time, \
    category, action_type, votes, locked, hidden, shadow_hidden, \
    video_duration, user_id, time_submitted, views, description";

/// Read access to stored skip segments, plus inserts for fixtures.
pub struct SponsorTimeRepo;

impl SponsorTimeRepo {
    /// Insert a row, returning it as stored.
    pub async fn create(
        pool: &PgPool,
        input: &CreateSponsorTime,
    ) -> Result<SponsorTime, sqlx::Error> {
        let query = format!(
            "INSERT INTO sponsor_times
                (uuid, video_id, service, start_time, end_time, category,
                 action_type, votes, locked, hidden, shadow_hidden,
                 video_duration, user_id, time_submitted, views, description)
             VALUES ($1, $2, COALESCE($3, 'YouTube'), $4, $5, $6,
                     COALESCE($7, 'skip'), COALESCE($8, 0), COALESCE($9, FALSE),
                     COALESCE($10, FALSE), COALESCE($11, FALSE),
                     COALESCE($12, 0), $13, COALESCE($14, NOW()),
                     COALESCE($15, 0), COALESCE($16, ''))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SponsorTime>(&query)
            .bind(&input.uuid)
            .bind(&input.video_id)
            .bind(&input.service)
            .bind(input.start_time)
            .bind(input.end_time)
            .bind(&input.category)
            .bind(&input.action_type)
            .bind(input.votes)
            .bind(input.locked)
            .bind(input.hidden)
            .bind(input.shadow_hidden)
            .bind(input.video_duration)
            .bind(&input.user_id)
            .bind(input.time_submitted)
            .bind(input.views)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Find a row by its segment UUID.
    pub async fn find_by_uuid(pool: &PgPool, uuid: &str) -> Result<Option<SponsorTime>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sponsor_times WHERE uuid = $1");
        sqlx::query_as::<_, SponsorTime>(&query)
            .bind(uuid)
            .fetch_optional(pool)
            .await
    }

    /// List every row stored for a video on a platform.
    ///
    /// No visibility or vote filtering happens here; hidden rows are
    /// returned too so the selection engine sees the full snapshot.
    pub async fn list_by_video(
        pool: &PgPool,
        video_id: &str,
        service: &str,
    ) -> Result<Vec<SponsorTime>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM sponsor_times
             WHERE video_id = $1 AND service = $2
             ORDER BY start_time ASC, id ASC"
        );
        sqlx::query_as::<_, SponsorTime>(&query)
            .bind(video_id)
            .bind(service)
            .fetch_all(pool)
            .await
    }
}
