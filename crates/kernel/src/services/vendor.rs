//! Vendor service.

use std::sync::Arc;

use tracing::info;

use crate::docstore::DocumentStore;
use crate::error::{AppError, AppResult};
use crate::models::{CreateVendor, UpdateVendor, Vendor};

use super::entity::{Entity, EntityService};

impl Entity for Vendor {
    const COLLECTION: &'static str = "vendors";

    fn id(&self) -> &str {
        &self.id
    }
}

/// Cached CRUD plus directory filters for vendors.
pub struct VendorService {
    entities: Arc<EntityService<Vendor>>,
}

impl VendorService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            entities: Arc::new(EntityService::new(store)),
        }
    }

    /// Start the background cache watcher.
    pub fn spawn_watcher(&self) -> tokio::task::JoinHandle<()> {
        self.entities.spawn_watcher()
    }

    pub async fn get_all(&self, force_refresh: bool) -> AppResult<Arc<Vec<Vendor>>> {
        self.entities.get_all(force_refresh).await
    }

    /// Publicly browsable vendors only.
    pub async fn get_active(&self) -> AppResult<Vec<Vendor>> {
        let all = self.entities.get_all(false).await?;
        Ok(all.iter().filter(|v| v.is_active()).cloned().collect())
    }

    /// Active vendors in an exact category.
    pub async fn get_by_category(&self, category: &str) -> AppResult<Vec<Vendor>> {
        let active = self.get_active().await?;
        Ok(active
            .into_iter()
            .filter(|v| v.category.as_deref() == Some(category))
            .collect())
    }

    pub async fn get_by_id(&self, id: &str) -> AppResult<Vendor> {
        self.entities.get_by_id(id).await
    }

    pub async fn create(&self, input: CreateVendor) -> AppResult<Vendor> {
        if input.name.trim().is_empty() {
            return Err(AppError::BadRequest("name is required".to_string()));
        }

        let vendor = self
            .entities
            .add(serde_json::to_value(&input).map_err(anyhow::Error::from)?)
            .await?;
        info!(id = %vendor.id, name = %vendor.name, "vendor created");
        Ok(vendor)
    }

    pub async fn update(&self, id: &str, input: UpdateVendor) -> AppResult<Vendor> {
        let vendor = self
            .entities
            .update(id, serde_json::to_value(&input).map_err(anyhow::Error::from)?)
            .await?;
        info!(id = %id, "vendor updated");
        Ok(vendor)
    }

    pub async fn delete(&self, id: &str) -> AppResult<String> {
        let id = self.entities.delete(id).await?;
        info!(id = %id, "vendor deleted");
        Ok(id)
    }
}

impl std::fmt::Debug for VendorService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VendorService").finish()
    }
}
