//! `sponsor_times` row model and DTOs.

use serde::{Deserialize, Serialize};
use skipsegments_core::segment::Segment;
use skipsegments_core::types::Timestamp;
use sqlx::FromRow;

/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// A row from the `sponsor_times` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SponsorTime {
    pub id: DbId,
    pub uuid: String,
    pub video_id: String,
    pub service: String,
    pub start_time: f64,
    pub end_time: f64,
    pub category: String,
    pub action_type: String,
    pub votes: i32,
    pub locked: bool,
    pub hidden: bool,
    pub shadow_hidden: bool,
    pub video_duration: f64,
    pub user_id: String,
    pub time_submitted: Timestamp,
    pub views: i32,
    pub description: String,
}

impl From<SponsorTime> for Segment {
    fn from(row: SponsorTime) -> Self {
        Segment {
            uuid: row.uuid,
            video_id: row.video_id,
            service: row.service,
            start_time: row.start_time,
            end_time: row.end_time,
            category: row.category,
            action_type: row.action_type,
            votes: row.votes,
            locked: row.locked,
            hidden: row.hidden,
            shadow_hidden: row.shadow_hidden,
            video_duration: row.video_duration,
            user_id: row.user_id,
            time_submitted: row.time_submitted,
            views: row.views,
            description: row.description,
        }
    }
}

/// DTO for inserting a row (fixtures and bulk imports).
///
/// Optional fields fall back to the column defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSponsorTime {
    pub uuid: String,
    pub video_id: String,
    pub service: Option<String>,
    pub start_time: f64,
    pub end_time: f64,
    pub category: String,
    pub action_type: Option<String>,
    pub votes: Option<i32>,
    pub locked: Option<bool>,
    pub hidden: Option<bool>,
    pub shadow_hidden: Option<bool>,
    pub video_duration: Option<f64>,
    pub user_id: String,
    pub time_submitted: Option<Timestamp>,
    pub views: Option<i32>,
    pub description: Option<String>,
}
