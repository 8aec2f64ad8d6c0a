//! PostgreSQL document store.
//!
//! Documents live in a single `document` table keyed by
//! `(collection, id)` with a JSONB payload. Timestamps are assigned by
//! the database (`DEFAULT now()` / `updated = now()`), so every write is
//! server-stamped. Updates are shallow JSONB merges (`data || $fields`),
//! matching the merge semantics of the in-memory backend.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::postgres::PgPool;
use sqlx::Row;
use tokio::sync::broadcast;
use tracing::debug;
use uuid::Uuid;

use super::{ChangeFeed, Document, DocumentStore, StoreError};

/// PostgreSQL-backed document store.
pub struct PgDocumentStore {
    pool: PgPool,
    changes: ChangeFeed,
}

impl PgDocumentStore {
    /// Create a new store over an existing pool.
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            changes: ChangeFeed::default(),
        }
    }
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    async fn add(&self, collection: &str, data: Value) -> Result<Document, StoreError> {
        if !data.is_object() {
            return Err(StoreError::Backend(anyhow::anyhow!(
                "document payload must be a JSON object"
            )));
        }

        let id = Uuid::now_v7().to_string();

        let row = sqlx::query(
            r#"
            INSERT INTO document (collection, id, data)
            VALUES ($1, $2, $3)
            RETURNING created, updated
            "#,
        )
        .bind(collection)
        .bind(&id)
        .bind(&data)
        .fetch_one(&self.pool)
        .await?;

        let created: DateTime<Utc> = row.try_get("created")?;
        let updated: DateTime<Utc> = row.try_get("updated")?;

        debug!(collection = %collection, id = %id, "document added");
        self.changes.notify(collection);

        Ok(Document {
            id,
            data,
            created,
            updated,
        })
    }

    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>, StoreError> {
        let row = sqlx::query(
            "SELECT id, data, created, updated FROM document WHERE collection = $1 AND id = $2",
        )
        .bind(collection)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|row| -> Result<Document, StoreError> {
            Ok(Document {
                id: row.try_get("id")?,
                data: row.try_get("data")?,
                created: row.try_get("created")?,
                updated: row.try_get("updated")?,
            })
        })
        .transpose()
    }

    async fn list(&self, collection: &str) -> Result<Vec<Document>, StoreError> {
        let rows = sqlx::query(
            r#"
            SELECT id, data, created, updated
            FROM document
            WHERE collection = $1
            ORDER BY created, id
            "#,
        )
        .bind(collection)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(|row| -> Result<Document, StoreError> {
                Ok(Document {
                    id: row.try_get("id")?,
                    data: row.try_get("data")?,
                    created: row.try_get("created")?,
                    updated: row.try_get("updated")?,
                })
            })
            .collect()
    }

    async fn update(&self, collection: &str, id: &str, fields: Value) -> Result<(), StoreError> {
        if !fields.is_object() {
            return Err(StoreError::Backend(anyhow::anyhow!(
                "update payload must be a JSON object"
            )));
        }

        let result = sqlx::query(
            r#"
            UPDATE document
            SET data = data || $3, updated = now()
            WHERE collection = $1 AND id = $2
            "#,
        )
        .bind(collection)
        .bind(id)
        .bind(&fields)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }

        debug!(collection = %collection, id = %id, "document updated");
        self.changes.notify(collection);
        Ok(())
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM document WHERE collection = $1 AND id = $2")
            .bind(collection)
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }

        debug!(collection = %collection, id = %id, "document deleted");
        self.changes.notify(collection);
        Ok(())
    }

    async fn append_to_array(
        &self,
        collection: &str,
        id: &str,
        field: &str,
        value: Value,
    ) -> Result<(), StoreError> {
        // `||` appends the value as an element when the left side is an array.
        let result = sqlx::query(
            r#"
            UPDATE document
            SET data = jsonb_set(data, ARRAY[$3]::text[],
                                 COALESCE(data->$3, '[]'::jsonb) || $4),
                updated = now()
            WHERE collection = $1 AND id = $2
            "#,
        )
        .bind(collection)
        .bind(id)
        .bind(field)
        .bind(&value)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }

        debug!(collection = %collection, id = %id, field = %field, "array element appended");
        self.changes.notify(collection);
        Ok(())
    }

    fn watch(&self, collection: &str) -> broadcast::Receiver<()> {
        self.changes.subscribe(collection)
    }

    async fn healthy(&self) -> bool {
        crate::db::check_health(&self.pool).await
    }
}

impl std::fmt::Debug for PgDocumentStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PgDocumentStore").finish()
    }
}
