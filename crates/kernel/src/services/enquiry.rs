//! Enquiry (lead) service.

use std::sync::Arc;

use tracing::info;

use crate::docstore::DocumentStore;
use crate::error::{AppError, AppResult};
use crate::models::{CreateEnquiry, Enquiry};

use super::entity::{Entity, EntityService};

impl Entity for Enquiry {
    const COLLECTION: &'static str = "enquiries";

    fn id(&self) -> &str {
        &self.id
    }
}

/// Lead capture from listing detail pages.
pub struct EnquiryService {
    entities: Arc<EntityService<Enquiry>>,
}

impl EnquiryService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            entities: Arc::new(EntityService::new(store)),
        }
    }

    /// Start the background cache watcher.
    pub fn spawn_watcher(&self) -> tokio::task::JoinHandle<()> {
        self.entities.spawn_watcher()
    }

    pub async fn get_all(&self, force_refresh: bool) -> AppResult<Arc<Vec<Enquiry>>> {
        self.entities.get_all(force_refresh).await
    }

    /// Enquiries for one listing, oldest first.
    pub async fn get_by_listing(&self, listing_id: &str) -> AppResult<Vec<Enquiry>> {
        let all = self.entities.get_all(false).await?;
        Ok(all
            .iter()
            .filter(|e| e.listing_id == listing_id)
            .cloned()
            .collect())
    }

    pub async fn get_by_id(&self, id: &str) -> AppResult<Enquiry> {
        self.entities.get_by_id(id).await
    }

    pub async fn submit(&self, input: CreateEnquiry) -> AppResult<Enquiry> {
        if input.name.trim().is_empty() || input.email.trim().is_empty() {
            return Err(AppError::BadRequest("name and email are required".to_string()));
        }
        if !matches!(input.listing_kind.as_str(), "banquet" | "vendor") {
            return Err(AppError::BadRequest(format!(
                "listingKind must be \"banquet\" or \"vendor\", got {:?}",
                input.listing_kind
            )));
        }

        let enquiry = self
            .entities
            .add(serde_json::to_value(&input).map_err(anyhow::Error::from)?)
            .await?;
        info!(id = %enquiry.id, listing = %enquiry.listing_id, "enquiry submitted");
        Ok(enquiry)
    }

    pub async fn delete(&self, id: &str) -> AppResult<String> {
        self.entities.delete(id).await
    }
}

impl std::fmt::Debug for EnquiryService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnquiryService").finish()
    }
}
