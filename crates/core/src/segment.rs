//! The stored segment record as seen by the selection engine.
//!
//! Rows are created and voted on by other subsystems; the engine only reads
//! them. Storage adapters convert their row types into [`Segment`].

use serde::{Deserialize, Serialize};

use crate::types::{SegmentUuid, Seconds, Timestamp};

/// A community-submitted time range within one video.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub uuid: SegmentUuid,
    pub video_id: String,
    pub service: String,
    pub start_time: Seconds,
    pub end_time: Seconds,
    pub category: String,
    pub action_type: String,
    pub votes: i32,
    pub locked: bool,
    pub hidden: bool,
    pub shadow_hidden: bool,
    pub video_duration: Seconds,
    // -- Pass-through submission metadata --
    pub user_id: String,
    pub time_submitted: Timestamp,
    pub views: i32,
    pub description: String,
}

impl Segment {
    /// `true` when a moderator (or the shadow-ban system) removed the row.
    pub fn is_moderated_out(&self) -> bool {
        self.hidden || self.shadow_hidden
    }

    /// `true` if the row targets the given video on the given platform.
    pub fn belongs_to(&self, video_id: &str, service: &str) -> bool {
        self.video_id == video_id && self.service == service
    }
}
