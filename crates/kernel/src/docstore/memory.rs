//! In-memory document store.
//!
//! Same contract as the PostgreSQL backend, kept in a process-local map.
//! Used by the test suites and by `STORE=memory` local runs.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde_json::Value;
use tokio::sync::broadcast;
use uuid::Uuid;

use super::{ChangeFeed, Document, DocumentStore, StoreError};

#[derive(Debug, Clone)]
struct StoredDoc {
    data: Value,
    created: DateTime<Utc>,
    updated: DateTime<Utc>,
}

/// Process-local document store.
#[derive(Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, HashMap<String, StoredDoc>>>,
    changes: ChangeFeed,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn add(&self, collection: &str, data: Value) -> Result<Document, StoreError> {
        if !data.is_object() {
            return Err(StoreError::Backend(anyhow::anyhow!(
                "document payload must be a JSON object"
            )));
        }

        let id = Uuid::now_v7().to_string();
        let now = Utc::now();
        let stored = StoredDoc {
            data: data.clone(),
            created: now,
            updated: now,
        };

        self.collections
            .write()
            .entry(collection.to_string())
            .or_default()
            .insert(id.clone(), stored);

        self.changes.notify(collection);

        Ok(Document {
            id,
            data,
            created: now,
            updated: now,
        })
    }

    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>, StoreError> {
        let collections = self.collections.read();
        let doc = collections
            .get(collection)
            .and_then(|docs| docs.get(id))
            .map(|stored| Document {
                id: id.to_string(),
                data: stored.data.clone(),
                created: stored.created,
                updated: stored.updated,
            });

        Ok(doc)
    }

    async fn list(&self, collection: &str) -> Result<Vec<Document>, StoreError> {
        let collections = self.collections.read();
        let mut docs: Vec<Document> = collections
            .get(collection)
            .map(|docs| {
                docs.iter()
                    .map(|(id, stored)| Document {
                        id: id.clone(),
                        data: stored.data.clone(),
                        created: stored.created,
                        updated: stored.updated,
                    })
                    .collect()
            })
            .unwrap_or_default();

        // Creation order, with the id as a tiebreak for same-instant inserts.
        docs.sort_by(|a, b| a.created.cmp(&b.created).then_with(|| a.id.cmp(&b.id)));

        Ok(docs)
    }

    async fn update(&self, collection: &str, id: &str, fields: Value) -> Result<(), StoreError> {
        let fields = fields
            .as_object()
            .ok_or_else(|| StoreError::Backend(anyhow::anyhow!("update payload must be a JSON object")))?
            .clone();

        {
            let mut collections = self.collections.write();
            let stored = collections
                .get_mut(collection)
                .and_then(|docs| docs.get_mut(id))
                .ok_or(StoreError::NotFound)?;

            if let Some(map) = stored.data.as_object_mut() {
                for (k, v) in fields {
                    map.insert(k, v);
                }
            }
            stored.updated = Utc::now();
        }

        self.changes.notify(collection);
        Ok(())
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<(), StoreError> {
        {
            let mut collections = self.collections.write();
            let removed = collections
                .get_mut(collection)
                .and_then(|docs| docs.remove(id));
            if removed.is_none() {
                return Err(StoreError::NotFound);
            }
        }

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
        {
            let mut collections = self.collections.write();
            let stored = collections
                .get_mut(collection)
                .and_then(|docs| docs.get_mut(id))
                .ok_or(StoreError::NotFound)?;

            let map = stored.data.as_object_mut().ok_or_else(|| {
                StoreError::Backend(anyhow::anyhow!("document payload is not a JSON object"))
            })?;

            let entry = map
                .entry(field.to_string())
                .or_insert_with(|| Value::Array(Vec::new()));
            let array = entry.as_array_mut().ok_or_else(|| {
                StoreError::Backend(anyhow::anyhow!("field {field:?} is not an array"))
            })?;
            array.push(value);
            stored.updated = Utc::now();
        }

        self.changes.notify(collection);
        Ok(())
    }

    fn watch(&self, collection: &str) -> broadcast::Receiver<()> {
        self.changes.subscribe(collection)
    }

    async fn healthy(&self) -> bool {
        true
    }
}

impl std::fmt::Debug for MemoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryStore").finish()
    }
}

#[cfg(test)]
// Tests are allowed to use unwrap/expect freely.
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn add_assigns_id_and_timestamps() {
        let store = MemoryStore::new();
        let doc = store
            .add("vendors", json!({"name": "Blossom Decor"}))
            .await
            .unwrap();

        assert!(!doc.id.is_empty());
        assert_eq!(doc.created, doc.updated);

        let fetched = store.get("vendors", &doc.id).await.unwrap().unwrap();
        assert_eq!(fetched.data["name"], "Blossom Decor");
    }

    #[tokio::test]
    async fn list_is_creation_ordered() {
        let store = MemoryStore::new();
        let a = store.add("vendors", json!({"n": 1})).await.unwrap();
        let b = store.add("vendors", json!({"n": 2})).await.unwrap();

        let docs = store.list("vendors").await.unwrap();
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].id, a.id);
        assert_eq!(docs[1].id, b.id);
    }

    #[tokio::test]
    async fn update_merges_shallowly_and_stamps() {
        let store = MemoryStore::new();
        let doc = store
            .add("vendors", json!({"name": "A", "city": "Pune"}))
            .await
            .unwrap();

        store
            .update("vendors", &doc.id, json!({"name": "B"}))
            .await
            .unwrap();

        let fetched = store.get("vendors", &doc.id).await.unwrap().unwrap();
        assert_eq!(fetched.data["name"], "B");
        assert_eq!(fetched.data["city"], "Pune");
        assert!(fetched.updated >= fetched.created);
    }

    #[tokio::test]
    async fn update_missing_is_not_found() {
        let store = MemoryStore::new();
        let err = store
            .update("vendors", "nope", json!({"name": "B"}))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound));
    }

    #[tokio::test]
    async fn append_creates_and_extends_array() {
        let store = MemoryStore::new();
        let doc = store.add("admins", json!({"name": "Asha"})).await.unwrap();

        store
            .append_to_array("admins", &doc.id, "actions", json!({"action": "login"}))
            .await
            .unwrap();
        store
            .append_to_array("admins", &doc.id, "actions", json!({"action": "logout"}))
            .await
            .unwrap();

        let fetched = store.get("admins", &doc.id).await.unwrap().unwrap();
        let actions = fetched.data["actions"].as_array().unwrap();
        assert_eq!(actions.len(), 2);
        assert_eq!(actions[0]["action"], "login");
        assert_eq!(actions[1]["action"], "logout");
    }

    #[tokio::test]
    async fn watch_ticks_on_writes() {
        let store = MemoryStore::new();
        let mut rx = store.watch("vendors");

        let doc = store.add("vendors", json!({"n": 1})).await.unwrap();
        assert!(rx.try_recv().is_ok());

        store.delete("vendors", &doc.id).await.unwrap();
        assert!(rx.try_recv().is_ok());
    }
}
