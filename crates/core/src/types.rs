/// Segment identifiers are opaque strings assigned by the submission service.
pub type SegmentUuid = String;

/// Playback positions and durations, in seconds.
pub type Seconds = f64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
