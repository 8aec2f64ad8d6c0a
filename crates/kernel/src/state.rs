//! Application state shared across all handlers.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use crate::config::{Config, StoreKind};
use crate::db;
use crate::docstore::{DocumentStore, MemoryStore, PgDocumentStore};
use crate::services::{
    AdminService, ApprovalService, BanquetService, BlogService, EnquiryService, VendorService,
};
use crate::upload::{ImageStorage, LocalImageStorage};

/// Shared application state.
///
/// Wrapped in Arc internally so Clone is cheap. Every service is
/// constructed exactly once here and reached through an accessor;
/// nothing in the kernel holds mutable globals.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    /// Backing document store.
    store: Arc<dyn DocumentStore>,

    /// Banquet venue service.
    banquets: Arc<BanquetService>,

    /// Vendor service.
    vendors: Arc<VendorService>,

    /// Admin service (accounts + action audit).
    admins: Arc<AdminService>,

    /// Approval workflow service.
    approvals: Arc<ApprovalService>,

    /// Enquiry (lead) service.
    enquiries: Arc<EnquiryService>,

    /// Blog service.
    blog: Arc<BlogService>,

    /// Listing image storage.
    images: Arc<dyn ImageStorage>,
}

impl AppState {
    /// Create application state from configuration.
    pub async fn new(config: &Config) -> Result<Self> {
        let store: Arc<dyn DocumentStore> = match config.store {
            StoreKind::Postgres => {
                let pool = db::create_pool(config)
                    .await
                    .context("failed to create database pool")?;
                db::run_migrations(&pool)
                    .await
                    .context("failed to run migrations")?;
                info!("connected to PostgreSQL document store");
                Arc::new(PgDocumentStore::new(pool))
            }
            StoreKind::Memory => {
                info!("using in-memory document store");
                Arc::new(MemoryStore::new())
            }
        };

        let images: Arc<dyn ImageStorage> = Arc::new(LocalImageStorage::new(
            &config.uploads_dir,
            &config.files_url,
        ));

        Ok(Self::with_store(store, images))
    }

    /// Build state over explicit collaborators.
    ///
    /// This is the injection seam the tests use with [`MemoryStore`].
    /// Must be called from within a Tokio runtime: each service spawns
    /// its background cache watcher here.
    pub fn with_store(store: Arc<dyn DocumentStore>, images: Arc<dyn ImageStorage>) -> Self {
        let banquets = Arc::new(BanquetService::new(store.clone()));
        let vendors = Arc::new(VendorService::new(store.clone()));
        let admins = Arc::new(AdminService::new(store.clone()));
        let approvals = Arc::new(ApprovalService::new(store.clone()));
        let enquiries = Arc::new(EnquiryService::new(store.clone()));
        let blog = Arc::new(BlogService::new(store.clone()));

        // Best-effort freshness; correctness comes from the services'
        // forced refresh after every write.
        banquets.spawn_watcher();
        vendors.spawn_watcher();
        admins.spawn_watcher();
        approvals.spawn_watcher();
        enquiries.spawn_watcher();
        blog.spawn_watcher();

        Self {
            inner: Arc::new(AppStateInner {
                store,
                banquets,
                vendors,
                admins,
                approvals,
                enquiries,
                blog,
                images,
            }),
        }
    }

    /// Get the banquet service.
    pub fn banquets(&self) -> &Arc<BanquetService> {
        &self.inner.banquets
    }

    /// Get the vendor service.
    pub fn vendors(&self) -> &Arc<VendorService> {
        &self.inner.vendors
    }

    /// Get the admin service.
    pub fn admins(&self) -> &Arc<AdminService> {
        &self.inner.admins
    }

    /// Get the approval workflow service.
    pub fn approvals(&self) -> &Arc<ApprovalService> {
        &self.inner.approvals
    }

    /// Get the enquiry service.
    pub fn enquiries(&self) -> &Arc<EnquiryService> {
        &self.inner.enquiries
    }

    /// Get the blog service.
    pub fn blog(&self) -> &Arc<BlogService> {
        &self.inner.blog
    }

    /// Get the image storage backend.
    pub fn images(&self) -> &Arc<dyn ImageStorage> {
        &self.inner.images
    }

    /// Check if the backing store is healthy.
    pub async fn store_healthy(&self) -> bool {
        self.inner.store.healthy().await
    }
}
