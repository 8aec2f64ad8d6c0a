//! Banquet venue service.

use std::sync::Arc;

use tracing::info;

use crate::docstore::DocumentStore;
use crate::error::{AppError, AppResult};
use crate::models::{Banquet, CreateBanquet, UpdateBanquet};

use super::entity::{Entity, EntityService};

impl Entity for Banquet {
    const COLLECTION: &'static str = "banquets";

    fn id(&self) -> &str {
        &self.id
    }
}

/// Cached CRUD plus listing filters for banquet venues.
pub struct BanquetService {
    entities: Arc<EntityService<Banquet>>,
}

impl BanquetService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            entities: Arc::new(EntityService::new(store)),
        }
    }

    /// Start the background cache watcher.
    pub fn spawn_watcher(&self) -> tokio::task::JoinHandle<()> {
        self.entities.spawn_watcher()
    }

    pub async fn get_all(&self, force_refresh: bool) -> AppResult<Arc<Vec<Banquet>>> {
        self.entities.get_all(force_refresh).await
    }

    /// Publicly browsable venues only.
    pub async fn get_active(&self) -> AppResult<Vec<Banquet>> {
        let all = self.entities.get_all(false).await?;
        Ok(all.iter().filter(|b| b.is_active()).cloned().collect())
    }

    pub async fn get_by_id(&self, id: &str) -> AppResult<Banquet> {
        self.entities.get_by_id(id).await
    }

    pub async fn create(&self, input: CreateBanquet) -> AppResult<Banquet> {
        if input.name.trim().is_empty() {
            return Err(AppError::BadRequest("name is required".to_string()));
        }

        let banquet = self
            .entities
            .add(serde_json::to_value(&input).map_err(anyhow::Error::from)?)
            .await?;
        info!(id = %banquet.id, name = %banquet.name, "banquet created");
        Ok(banquet)
    }

    pub async fn update(&self, id: &str, input: UpdateBanquet) -> AppResult<Banquet> {
        let banquet = self
            .entities
            .update(id, serde_json::to_value(&input).map_err(anyhow::Error::from)?)
            .await?;
        info!(id = %id, "banquet updated");
        Ok(banquet)
    }

    pub async fn delete(&self, id: &str) -> AppResult<String> {
        let id = self.entities.delete(id).await?;
        info!(id = %id, "banquet deleted");
        Ok(id)
    }
}

impl std::fmt::Debug for BanquetService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BanquetService").finish()
    }
}
