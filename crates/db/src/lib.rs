//! Persistence layer for the stars service.
//!
//! Owns the entity model, the repository (all SQL lives here), pool
//! construction, and startup migrations. Handlers receive a [`DbPool`]
//! and never touch SQL directly.

use sqlx::sqlite::SqlitePoolOptions;

pub mod models;
pub mod repositories;

pub type DbPool = sqlx::SqlitePool;

/// Create a connection pool from a database URL.
///
/// URLs of the form `sqlite:stars.db?mode=rwc` create the database file
/// on first open.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    SqlitePoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await
}

/// Verify the database is reachable with a trivial query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply pending migrations from the workspace `migrations/` directory.
///
/// Creates the `stars` table on first startup; a no-op on every
/// subsequent one.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../migrations").run(pool).await
}
