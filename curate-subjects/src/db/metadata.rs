//! SQLite-backed metadata store
//!
//! Reference implementation of the `MetadataStore` seam over the shared
//! repository database. The write context is a sqlx transaction: commit
//! persists every staged append atomically, drop rolls them back.

use crate::models::{MetadataField, MetadataValue};
use crate::store::MetadataStore;
use async_trait::async_trait;
use curate_common::Result;
use sqlx::{Row, Sqlite, SqlitePool, Transaction};
use uuid::Uuid;

/// Metadata store over a SQLite connection pool
#[derive(Clone)]
pub struct SqliteMetadataStore {
    pool: SqlitePool,
}

impl SqliteMetadataStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MetadataStore for SqliteMetadataStore {
    type WriteContext = Transaction<'static, Sqlite>;

    async fn read_values(
        &self,
        object: Uuid,
        field: &MetadataField,
    ) -> Result<Vec<MetadataValue>> {
        let rows = sqlx::query(
            r#"
            SELECT value, language
            FROM metadata_values
            WHERE object_guid = ? AND schema = ? AND element = ? AND qualifier IS ?
            ORDER BY place, id
            "#,
        )
        .bind(object.to_string())
        .bind(field.schema)
        .bind(field.element)
        .bind(field.qualifier)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| MetadataValue {
                value: row.get("value"),
                language: row.get("language"),
            })
            .collect())
    }

    async fn begin_write(&self) -> Result<Self::WriteContext> {
        Ok(self.pool.begin().await?)
    }

    async fn append_value(
        &self,
        ctx: &mut Self::WriteContext,
        object: Uuid,
        field: &MetadataField,
        value: &MetadataValue,
    ) -> Result<()> {
        // Appends go at the end of the field's value sequence.
        sqlx::query(
            r#"
            INSERT INTO metadata_values (object_guid, schema, element, qualifier, language, value, place)
            VALUES (?, ?, ?, ?, ?, ?, (
                SELECT COALESCE(MAX(place) + 1, 0)
                FROM metadata_values
                WHERE object_guid = ? AND schema = ? AND element = ? AND qualifier IS ?
            ))
            "#,
        )
        .bind(object.to_string())
        .bind(field.schema)
        .bind(field.element)
        .bind(field.qualifier)
        .bind(&value.language)
        .bind(&value.value)
        .bind(object.to_string())
        .bind(field.schema)
        .bind(field.element)
        .bind(field.qualifier)
        .execute(&mut **ctx)
        .await?;

        Ok(())
    }

    async fn commit(&self, mut ctx: Self::WriteContext, object: Uuid) -> Result<()> {
        sqlx::query("UPDATE objects SET updated_at = CURRENT_TIMESTAMP WHERE guid = ?")
            .bind(object.to_string())
            .execute(&mut *ctx)
            .await?;

        ctx.commit().await?;
        Ok(())
    }
}
