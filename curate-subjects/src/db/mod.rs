//! Database access for curate-subjects
//!
//! Repository objects and their metadata live in a shared SQLite database.

pub mod metadata;
pub mod objects;

pub use metadata::SqliteMetadataStore;

use anyhow::Result;
use sqlx::SqlitePool;
use std::path::Path;

/// Initialize database connection pool
///
/// Opens (or creates) the repository database and ensures the tables used
/// by the curation step exist.
pub async fn init_database_pool(db_path: &Path) -> Result<SqlitePool> {
    // Ensure parent directory exists
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent).map_err(curate_common::Error::Io)?;
    }

    // Use proper SQLite URI with mode=rwc (read, write, create)
    let db_url = format!("sqlite://{}?mode=rwc", db_path.display());
    tracing::debug!("Connecting to database: {}", db_url);

    let pool = SqlitePool::connect(&db_url).await?;
    init_tables(&pool).await?;

    Ok(pool)
}

/// Create the objects and metadata tables if they don't exist
pub async fn init_tables(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS objects (
            guid TEXT PRIMARY KEY,
            kind TEXT NOT NULL,
            handle TEXT UNIQUE,
            created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
            updated_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS metadata_values (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            object_guid TEXT NOT NULL REFERENCES objects(guid),
            schema TEXT NOT NULL,
            element TEXT NOT NULL,
            qualifier TEXT,
            language TEXT,
            value TEXT NOT NULL,
            place INTEGER NOT NULL DEFAULT 0
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_metadata_values_field
        ON metadata_values (object_guid, schema, element, qualifier)
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
