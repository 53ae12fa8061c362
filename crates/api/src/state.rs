use std::sync::Arc;

use skipsegments_core::source::SegmentSource;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Candidate fetcher (PostgreSQL in production, in-memory in tests).
    pub source: Arc<dyn SegmentSource>,
    /// Server configuration, including selection tunables.
    pub config: Arc<ServerConfig>,
}
