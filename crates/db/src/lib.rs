//! PostgreSQL storage for skip segments.
//!
//! Connection pooling, migrations, the `sponsor_times` repository and the
//! [`PgSegmentSource`] adapter the selection engine fetches through.

use sqlx::postgres::PgPoolOptions;

pub mod models;
pub mod repositories;
pub mod segment_source;

pub use segment_source::PgSegmentSource;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Verify the database answers a trivial query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply the embedded migrations in `crates/db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
