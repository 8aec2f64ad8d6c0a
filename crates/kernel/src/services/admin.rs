//! Admin account service and action audit.
//!
//! Audit entries are appended to the admin's record through the store's
//! array-append primitive; nothing in this service rewrites or removes
//! an existing entry.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::docstore::DocumentStore;
use crate::error::{AppError, AppResult};
use crate::models::admin::ROLE_SUPERADMIN;
use crate::models::{ActionLogEntry, Admin, CreateAdmin, UpdateAdmin};

use super::entity::{Entity, EntityService};

impl Entity for Admin {
    const COLLECTION: &'static str = "admins";

    fn id(&self) -> &str {
        &self.id
    }

    fn is_protected(&self) -> bool {
        self.role == ROLE_SUPERADMIN
    }
}

/// Cached CRUD plus the append-only action audit for admins.
pub struct AdminService {
    entities: Arc<EntityService<Admin>>,
    store: Arc<dyn DocumentStore>,
}

impl AdminService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            entities: Arc::new(EntityService::new(store.clone())),
            store,
        }
    }

    /// Start the background cache watcher.
    pub fn spawn_watcher(&self) -> tokio::task::JoinHandle<()> {
        self.entities.spawn_watcher()
    }

    pub async fn get_all(&self, force_refresh: bool) -> AppResult<Arc<Vec<Admin>>> {
        self.entities.get_all(force_refresh).await
    }

    pub async fn get_by_id(&self, id: &str) -> AppResult<Admin> {
        self.entities.get_by_id(id).await
    }

    pub async fn create(&self, input: CreateAdmin) -> AppResult<Admin> {
        if input.name.trim().is_empty() || input.email.trim().is_empty() {
            return Err(AppError::BadRequest("name and email are required".to_string()));
        }

        let admin = self
            .entities
            .add(serde_json::to_value(&input).map_err(anyhow::Error::from)?)
            .await?;
        info!(id = %admin.id, email = %admin.email, "admin created");
        Ok(admin)
    }

    pub async fn update(&self, id: &str, input: UpdateAdmin) -> AppResult<Admin> {
        let admin = self
            .entities
            .update(id, serde_json::to_value(&input).map_err(anyhow::Error::from)?)
            .await?;
        info!(id = %id, "admin updated");
        Ok(admin)
    }

    /// Superadmin accounts are refused with Forbidden.
    pub async fn delete(&self, id: &str) -> AppResult<String> {
        let id = self.entities.delete(id).await?;
        info!(id = %id, "admin deleted");
        Ok(id)
    }

    /// Append one audit entry to an admin's action log and return it.
    pub async fn log_action(
        &self,
        admin_id: &str,
        action: &str,
        target: &str,
    ) -> AppResult<ActionLogEntry> {
        if action.trim().is_empty() || target.trim().is_empty() {
            return Err(AppError::BadRequest("action and target are required".to_string()));
        }

        // Surface NotFound before touching the store's array primitive.
        self.entities.get_by_id(admin_id).await?;

        let entry = ActionLogEntry {
            action: action.to_string(),
            target: target.to_string(),
            timestamp: Utc::now(),
        };

        self.store
            .append_to_array(
                Admin::COLLECTION,
                admin_id,
                "actions",
                serde_json::to_value(&entry).map_err(anyhow::Error::from)?,
            )
            .await?;

        self.entities.refresh().await?;
        debug!(admin = %admin_id, action = %entry.action, target = %entry.target, "action logged");
        Ok(entry)
    }

    /// Action log entries newest-first, optionally bounded by an
    /// inclusive timestamp range.
    pub async fn get_action_logs(
        &self,
        admin_id: &str,
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    ) -> AppResult<Vec<ActionLogEntry>> {
        let admin = self.entities.get_by_id(admin_id).await?;

        let mut entries: Vec<ActionLogEntry> = admin
            .actions
            .into_iter()
            .filter(|e| start.is_none_or(|s| e.timestamp >= s))
            .filter(|e| end.is_none_or(|s| e.timestamp <= s))
            .collect();

        entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(entries)
    }
}

impl std::fmt::Debug for AdminService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminService").finish()
    }
}
