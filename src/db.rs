//! Database connection pool and schema management.
//!
//! This module provides utilities for:
//! - Creating and managing a SQLite connection pool
//! - Ensuring the `quotes` schema exists on startup

use std::{path::Path, str::FromStr};

use sqlx::{
    Pool, Sqlite,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};

/// Type alias for SQLite connection pool.
pub type DbPool = Pool<Sqlite>;

/// Create a new SQLite connection pool.
///
/// Handlers acquire one connection per request from this pool, so concurrent
/// requests never share a connection handle.
///
/// # Arguments
///
/// * `database_url` - SQLite connection string (e.g. `sqlite:data/quotes.db`)
///
/// # Configuration
///
/// - Maximum connections: 5
/// - The database file is created if missing, along with its parent directory
///
/// # Errors
///
/// Returns an error if:
/// - Database connection string is invalid
/// - The database file or its directory cannot be created or opened
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    // In-memory databases report an empty filename
    let filename = options.get_filename();
    if let Some(parent) = filename.parent().filter(|p| !p.as_os_str().is_empty()) {
        create_parent_dir(parent).await?;
    }

    SqlitePoolOptions::new()
        // Limit concurrent connections
        .max_connections(5)
        .connect_with(options)
        .await
}

async fn create_parent_dir(dir: &Path) -> Result<(), sqlx::Error> {
    tokio::fs::create_dir_all(dir).await?;
    Ok(())
}

/// Ensure the `quotes` table exists.
///
/// Runs the migrations embedded from the `migrations/` directory. Applied
/// migrations are tracked in `_sqlx_migrations`, and the table itself is
/// created with `IF NOT EXISTS`, so this is safe to call on every startup,
/// including against a database created by an earlier deployment.
///
/// # Errors
///
/// Returns an error if the database rejects the DDL or the migration
/// bookkeeping table cannot be written.
pub async fn ensure_schema(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    // The macro reads migrations at compile time from ./migrations directory
    sqlx::migrate!("./migrations").run(pool).await
}
