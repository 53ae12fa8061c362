use skipsegments_core::overlap::{RequiredOverlap, DEFAULT_OVERLAP_TOLERANCE_SECS};
use skipsegments_core::selection::SelectionConfig;
use skipsegments_core::visibility::DEFAULT_MIN_VISIBLE_VOTES;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Maximum pooled database connections (default: `20`).
    pub db_max_connections: u32,
    /// Selection engine tunables.
    pub selection: SelectionConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                  | Default                    |
    /// |--------------------------|----------------------------|
    /// | `HOST`                   | `0.0.0.0`                  |
    /// | `PORT`                   | `3000`                     |
    /// | `CORS_ORIGINS`           | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS`   | `30`                       |
    /// | `DB_MAX_CONNECTIONS`     | `20`                       |
    /// | `MIN_VISIBLE_VOTES`      | `-1`                       |
    /// | `OVERLAP_TOLERANCE_SECS` | `0.0`                      |
    /// | `REQUIRED_OVERLAP_MODE`  | `additive`                 |
    ///
    /// Panics on unparsable values so misconfiguration fails at startup.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let db_max_connections: u32 = std::env::var("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "20".into())
            .parse()
            .expect("DB_MAX_CONNECTIONS must be a valid u32");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            db_max_connections,
            selection: selection_from_env(),
        }
    }
}

fn selection_from_env() -> SelectionConfig {
    let min_visible_votes: i32 = std::env::var("MIN_VISIBLE_VOTES")
        .unwrap_or_else(|_| DEFAULT_MIN_VISIBLE_VOTES.to_string())
        .parse()
        .expect("MIN_VISIBLE_VOTES must be a valid i32");

    let overlap_tolerance_secs: f64 = std::env::var("OVERLAP_TOLERANCE_SECS")
        .unwrap_or_else(|_| DEFAULT_OVERLAP_TOLERANCE_SECS.to_string())
        .parse()
        .expect("OVERLAP_TOLERANCE_SECS must be a valid f64");
    assert!(
        overlap_tolerance_secs.is_finite() && overlap_tolerance_secs >= 0.0,
        "OVERLAP_TOLERANCE_SECS must be a non-negative number"
    );

    let required_overlap: RequiredOverlap = match std::env::var("REQUIRED_OVERLAP_MODE") {
        Ok(raw) => raw
            .parse()
            .unwrap_or_else(|e| panic!("REQUIRED_OVERLAP_MODE: {e}")),
        Err(_) => RequiredOverlap::default(),
    };

    SelectionConfig {
        min_visible_votes,
        overlap_tolerance_secs,
        required_overlap,
    }
}
