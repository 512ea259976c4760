//! Repository object persistence

use crate::models::{ObjectKind, RepositoryObject};
use anyhow::{anyhow, Result};
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

/// Save a repository object, updating kind and handle on conflict
pub async fn save_object(pool: &SqlitePool, object: &RepositoryObject) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO objects (guid, kind, handle, created_at, updated_at)
        VALUES (?, ?, ?, CURRENT_TIMESTAMP, CURRENT_TIMESTAMP)
        ON CONFLICT(guid) DO UPDATE SET
            kind = excluded.kind,
            handle = excluded.handle,
            updated_at = CURRENT_TIMESTAMP
        "#,
    )
    .bind(object.guid.to_string())
    .bind(object.kind.as_str())
    .bind(&object.handle)
    .execute(pool)
    .await?;

    Ok(())
}

/// Load an object by guid
pub async fn load_object(pool: &SqlitePool, guid: Uuid) -> Result<Option<RepositoryObject>> {
    let row = sqlx::query("SELECT guid, kind, handle FROM objects WHERE guid = ?")
        .bind(guid.to_string())
        .fetch_optional(pool)
        .await?;

    row.map(object_from_row).transpose()
}

/// Load an object by its public handle
pub async fn load_object_by_handle(
    pool: &SqlitePool,
    handle: &str,
) -> Result<Option<RepositoryObject>> {
    let row = sqlx::query("SELECT guid, kind, handle FROM objects WHERE handle = ?")
        .bind(handle)
        .fetch_optional(pool)
        .await?;

    row.map(object_from_row).transpose()
}

/// List every object, in insertion order
pub async fn list_objects(pool: &SqlitePool) -> Result<Vec<RepositoryObject>> {
    let rows = sqlx::query("SELECT guid, kind, handle FROM objects ORDER BY created_at, guid")
        .fetch_all(pool)
        .await?;

    rows.into_iter().map(object_from_row).collect()
}

fn object_from_row(row: sqlx::sqlite::SqliteRow) -> Result<RepositoryObject> {
    let guid_str: String = row.get("guid");
    let guid = Uuid::parse_str(&guid_str)?;

    let kind_str: String = row.get("kind");
    let kind = ObjectKind::parse(&kind_str)
        .ok_or_else(|| anyhow!("Unknown object kind in database: {}", kind_str))?;

    let handle: Option<String> = row.get("handle");

    Ok(RepositoryObject { guid, kind, handle })
}
