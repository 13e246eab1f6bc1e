//! Embedded database migrations
//!
//! The schema lives in `migrations/` and is compiled into the binary with
//! `sqlx::migrate!`, so deployments and the test harness apply exactly the
//! same DDL.

use sqlx::migrate::Migrator;
use sqlx::PgPool;
use tracing::info;

use crate::error::DatabaseError;

/// The embedded migrator for the POS schema
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Applies all pending migrations
///
/// # Errors
///
/// Returns `DatabaseError::MigrationFailed` if any migration fails to apply
pub async fn run_migrations(pool: &PgPool) -> Result<(), DatabaseError> {
    info!("Running database migrations");

    MIGRATOR
        .run(pool)
        .await
        .map_err(|e| DatabaseError::MigrationFailed(e.to_string()))?;

    info!("Database schema up to date");
    Ok(())
}
