//! Document store abstraction.
//!
//! Collection-scoped CRUD over JSON documents with server-assigned
//! timestamps, array-append for audit logs, and best-effort change
//! notification. Two backends: PostgreSQL (JSONB) and in-memory.
//!
//! All entity persistence MUST go through this interface.

mod memory;
mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgDocumentStore;

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use tokio::sync::broadcast;

use crate::error::AppError;

/// Store-level errors, mapped to [`AppError`] at the service boundary.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("document not found")]
    NotFound,

    #[error("serialization error")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Backend(#[from] anyhow::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        StoreError::Backend(e.into())
    }
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound => AppError::NotFound,
            StoreError::Serialization(e) => AppError::Internal(e.into()),
            StoreError::Backend(e) => AppError::Internal(e),
        }
    }
}

/// A stored document: payload plus store-assigned identity and timestamps.
#[derive(Debug, Clone)]
pub struct Document {
    pub id: String,
    pub data: Value,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
}

impl Document {
    /// Deserialize into an entity type, merging `id`/`created`/`updated`
    /// into the payload first.
    pub fn into_entity<T: DeserializeOwned>(self) -> Result<T, StoreError> {
        let mut data = self.data;
        if let Some(map) = data.as_object_mut() {
            map.insert("id".to_string(), Value::String(self.id));
            map.insert("created".to_string(), serde_json::to_value(self.created)?);
            map.insert("updated".to_string(), serde_json::to_value(self.updated)?);
        }
        Ok(serde_json::from_value(data)?)
    }
}

/// Collection-scoped document storage.
///
/// Writes are strongly consistent: a read issued after a returned write
/// observes that write. Change notifications are best-effort extras on
/// top of that guarantee, never a substitute for it.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Insert a new document, assigning its id and timestamps.
    async fn add(&self, collection: &str, data: Value) -> Result<Document, StoreError>;

    /// Fetch a single document.
    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>, StoreError>;

    /// Full ordered read of a collection (by creation time).
    async fn list(&self, collection: &str) -> Result<Vec<Document>, StoreError>;

    /// Shallow-merge `fields` into an existing document and stamp `updated`.
    async fn update(&self, collection: &str, id: &str, fields: Value) -> Result<(), StoreError>;

    /// Remove a document.
    async fn delete(&self, collection: &str, id: &str) -> Result<(), StoreError>;

    /// Append a value to an array field (creating the array if absent).
    ///
    /// Existing elements are never rewritten; this is the persistence
    /// primitive behind the append-only audit log.
    async fn append_to_array(
        &self,
        collection: &str,
        id: &str,
        field: &str,
        value: Value,
    ) -> Result<(), StoreError>;

    /// Subscribe to change ticks for a collection.
    ///
    /// A tick means "the collection changed, re-read if you care"; it
    /// carries no payload and may be dropped under lag.
    fn watch(&self, collection: &str) -> broadcast::Receiver<()>;

    /// Whether the backing store is reachable.
    async fn healthy(&self) -> bool;
}

/// Per-collection change broadcast shared by store implementations.
#[derive(Default)]
pub(crate) struct ChangeFeed {
    senders: parking_lot::RwLock<HashMap<String, broadcast::Sender<()>>>,
}

/// Buffered ticks per watcher; a slow watcher just coalesces refreshes.
const CHANGE_FEED_CAPACITY: usize = 16;

impl ChangeFeed {
    pub(crate) fn subscribe(&self, collection: &str) -> broadcast::Receiver<()> {
        let mut senders = self.senders.write();
        senders
            .entry(collection.to_string())
            .or_insert_with(|| broadcast::channel(CHANGE_FEED_CAPACITY).0)
            .subscribe()
    }

    pub(crate) fn notify(&self, collection: &str) {
        let senders = self.senders.read();
        if let Some(tx) = senders.get(collection) {
            // Send fails only when no watcher is subscribed.
            let _ = tx.send(());
        }
    }
}
