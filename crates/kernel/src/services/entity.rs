//! Generic cached entity service.
//!
//! One instance per entity type holds the in-memory collection array.
//! The array is replaced wholesale under a write lock, so concurrent
//! readers observe either the old or the new array, never a torn mix.
//!
//! Consistency model: every mutation forces a full re-read before
//! returning (read-your-writes). The store's change feed additionally
//! refreshes the cache in the background, but that path is best-effort
//! freshness only; correctness never depends on it.

use std::sync::Arc;

use parking_lot::RwLock;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::docstore::DocumentStore;
use crate::error::{AppError, AppResult};

/// A cacheable catalog entity.
pub trait Entity: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Backing collection name.
    const COLLECTION: &'static str;

    /// Stable unique identifier.
    fn id(&self) -> &str;

    /// Protected records cannot be deleted.
    fn is_protected(&self) -> bool {
        false
    }
}

/// Cached document-store access for one entity type.
pub struct EntityService<T: Entity> {
    store: Arc<dyn DocumentStore>,
    cache: RwLock<Option<Arc<Vec<T>>>>,
}

impl<T: Entity> EntityService<T> {
    /// Create a service over the given store. The cache starts empty and
    /// fills lazily on first read.
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store,
            cache: RwLock::new(None),
        }
    }

    /// Return the collection, re-reading from the store when forced or
    /// when the cache has never been filled.
    pub async fn get_all(&self, force_refresh: bool) -> AppResult<Arc<Vec<T>>> {
        if !force_refresh {
            if let Some(cached) = self.cache.read().clone() {
                return Ok(cached);
            }
        }

        self.refresh().await
    }

    /// Fetch one entity: cache scan first, then a single-document read.
    pub async fn get_by_id(&self, id: &str) -> AppResult<T> {
        if let Some(cached) = self.cache.read().clone() {
            if let Some(entity) = cached.iter().find(|e| e.id() == id) {
                return Ok(entity.clone());
            }
        }

        let doc = self
            .store
            .get(T::COLLECTION, id)
            .await?
            .ok_or(AppError::NotFound)?;

        Ok(doc.into_entity()?)
    }

    /// Create an entity, then re-read it and force a full cache refresh
    /// so the next unforced read already reflects it.
    pub async fn add(&self, data: Value) -> AppResult<T> {
        let doc = self.store.add(T::COLLECTION, data).await?;
        let id = doc.id.clone();

        // Both backends are read-after-write consistent, so the re-read
        // needs no propagation delay.
        let doc = self
            .store
            .get(T::COLLECTION, &id)
            .await?
            .ok_or_else(|| AppError::Internal(anyhow::anyhow!("document {id} vanished after insert")))?;
        let entity: T = doc.into_entity()?;

        self.refresh().await?;
        debug!(collection = T::COLLECTION, id = %id, "entity added");
        Ok(entity)
    }

    /// Merge partial fields into an entity, re-read it, and force a full
    /// cache refresh.
    pub async fn update(&self, id: &str, partial: Value) -> AppResult<T> {
        self.store.update(T::COLLECTION, id, partial).await?;

        let doc = self
            .store
            .get(T::COLLECTION, id)
            .await?
            .ok_or_else(|| AppError::Internal(anyhow::anyhow!("document {id} vanished after update")))?;
        let entity: T = doc.into_entity()?;

        self.refresh().await?;
        debug!(collection = T::COLLECTION, id = %id, "entity updated");
        Ok(entity)
    }

    /// Delete an entity and force a full cache refresh.
    ///
    /// Protected records are refused.
    pub async fn delete(&self, id: &str) -> AppResult<String> {
        let entity = self.get_by_id(id).await?;
        if entity.is_protected() {
            return Err(AppError::Forbidden(format!(
                "record {id} is protected and cannot be deleted"
            )));
        }

        self.store.delete(T::COLLECTION, id).await?;
        self.refresh().await?;
        debug!(collection = T::COLLECTION, id = %id, "entity deleted");
        Ok(id.to_string())
    }

    /// Drop the cached array; the next read re-fills it.
    pub fn invalidate(&self) {
        *self.cache.write() = None;
    }

    /// Re-read the full collection and swap it into the cache.
    pub async fn refresh(&self) -> AppResult<Arc<Vec<T>>> {
        let docs = self.store.list(T::COLLECTION).await?;

        let mut entities = Vec::with_capacity(docs.len());
        for doc in docs {
            let id = doc.id.clone();
            match doc.into_entity::<T>() {
                Ok(entity) => entities.push(entity),
                // A malformed document degrades to exclusion, not failure.
                Err(e) => warn!(
                    collection = T::COLLECTION,
                    id = %id,
                    error = %e,
                    "skipping undeserializable document"
                ),
            }
        }

        let fresh = Arc::new(entities);
        *self.cache.write() = Some(fresh.clone());
        debug!(collection = T::COLLECTION, count = fresh.len(), "cache refreshed");
        Ok(fresh)
    }

    /// Spawn the background cache watcher for this service.
    ///
    /// Refreshes on store change ticks; lagged ticks coalesce into a
    /// single refresh. The task ends when the store drops its feed.
    pub fn spawn_watcher(self: &Arc<Self>) -> tokio::task::JoinHandle<()> {
        let service = Arc::clone(self);
        let mut rx = service.store.watch(T::COLLECTION);

        tokio::spawn(async move {
            loop {
                match rx.recv().await {
                    Ok(()) | Err(tokio::sync::broadcast::error::RecvError::Lagged(_)) => {
                        if let Err(e) = service.refresh().await {
                            warn!(
                                collection = T::COLLECTION,
                                error = %e,
                                "background cache refresh failed"
                            );
                        }
                    }
                    Err(tokio::sync::broadcast::error::RecvError::Closed) => break,
                }
            }
        })
    }
}

impl<T: Entity> std::fmt::Debug for EntityService<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EntityService")
            .field("collection", &T::COLLECTION)
            .finish()
    }
}
