//! Vendor approval workflow.
//!
//! `pending -> {approved, rejected}`, both terminal. Processing stamps
//! `processedAt` and persists reviewer notes; a second processing
//! attempt is rejected with Conflict rather than silently overwriting.

use std::sync::Arc;

use chrono::Utc;
use serde_json::json;
use tracing::info;

use crate::docstore::DocumentStore;
use crate::error::{AppError, AppResult};
use crate::models::{ApprovalRequest, ApprovalStatus, CreateApprovalRequest};

use super::entity::{Entity, EntityService};

impl Entity for ApprovalRequest {
    const COLLECTION: &'static str = "approval_requests";

    fn id(&self) -> &str {
        &self.id
    }
}

/// Approval request intake and processing.
pub struct ApprovalService {
    entities: Arc<EntityService<ApprovalRequest>>,
}

impl ApprovalService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            entities: Arc::new(EntityService::new(store)),
        }
    }

    /// Start the background cache watcher.
    pub fn spawn_watcher(&self) -> tokio::task::JoinHandle<()> {
        self.entities.spawn_watcher()
    }

    pub async fn get_all(&self, force_refresh: bool) -> AppResult<Arc<Vec<ApprovalRequest>>> {
        self.entities.get_all(force_refresh).await
    }

    /// Requests still awaiting a decision.
    pub async fn get_pending(&self) -> AppResult<Vec<ApprovalRequest>> {
        let all = self.entities.get_all(false).await?;
        Ok(all
            .iter()
            .filter(|r| r.status == ApprovalStatus::Pending)
            .cloned()
            .collect())
    }

    pub async fn get_by_id(&self, id: &str) -> AppResult<ApprovalRequest> {
        self.entities.get_by_id(id).await
    }

    /// Submit a new request; it enters the workflow as `pending`.
    pub async fn submit(&self, input: CreateApprovalRequest) -> AppResult<ApprovalRequest> {
        if input.vendor_name.trim().is_empty() || input.email.trim().is_empty() {
            return Err(AppError::BadRequest(
                "vendorName and email are required".to_string(),
            ));
        }

        let mut data = serde_json::to_value(&input).map_err(anyhow::Error::from)?;
        if let Some(map) = data.as_object_mut() {
            map.insert("status".to_string(), json!(ApprovalStatus::Pending));
        }

        let request = self.entities.add(data).await?;
        info!(id = %request.id, vendor = %request.vendor_name, "approval request submitted");
        Ok(request)
    }

    /// Decide a pending request.
    ///
    /// Terminal requests are immutable: processing one again fails with
    /// Conflict.
    pub async fn process(
        &self,
        id: &str,
        approve: bool,
        notes: Option<String>,
    ) -> AppResult<ApprovalRequest> {
        let current = self.entities.get_by_id(id).await?;
        if current.status.is_terminal() {
            return Err(AppError::Conflict(format!(
                "approval request {id} has already been processed"
            )));
        }

        let status = if approve {
            ApprovalStatus::Approved
        } else {
            ApprovalStatus::Rejected
        };

        let request = self
            .entities
            .update(
                id,
                json!({
                    "status": status,
                    "notes": notes,
                    "processedAt": Utc::now(),
                }),
            )
            .await?;

        info!(id = %id, approved = approve, "approval request processed");
        Ok(request)
    }

    pub async fn delete(&self, id: &str) -> AppResult<String> {
        self.entities.delete(id).await
    }
}

impl std::fmt::Debug for ApprovalService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApprovalService").finish()
    }
}
