//! Blog post service.

use std::sync::Arc;

use tracing::info;

use crate::docstore::DocumentStore;
use crate::error::{AppError, AppResult};
use crate::models::{BlogPost, CreateBlogPost, UpdateBlogPost};

use super::entity::{Entity, EntityService};

impl Entity for BlogPost {
    const COLLECTION: &'static str = "blog_posts";

    fn id(&self) -> &str {
        &self.id
    }
}

/// Blog content management.
pub struct BlogService {
    entities: Arc<EntityService<BlogPost>>,
}

impl BlogService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            entities: Arc::new(EntityService::new(store)),
        }
    }

    /// Start the background cache watcher.
    pub fn spawn_watcher(&self) -> tokio::task::JoinHandle<()> {
        self.entities.spawn_watcher()
    }

    pub async fn get_all(&self, force_refresh: bool) -> AppResult<Arc<Vec<BlogPost>>> {
        self.entities.get_all(force_refresh).await
    }

    /// Published posts only, for the public blog index.
    pub async fn get_published(&self) -> AppResult<Vec<BlogPost>> {
        let all = self.entities.get_all(false).await?;
        Ok(all.iter().filter(|p| p.published).cloned().collect())
    }

    /// Look up a published post by slug.
    pub async fn get_by_slug(&self, slug: &str) -> AppResult<BlogPost> {
        let all = self.entities.get_all(false).await?;
        all.iter()
            .find(|p| p.published && p.slug == slug)
            .cloned()
            .ok_or(AppError::NotFound)
    }

    pub async fn get_by_id(&self, id: &str) -> AppResult<BlogPost> {
        self.entities.get_by_id(id).await
    }

    pub async fn create(&self, input: CreateBlogPost) -> AppResult<BlogPost> {
        if input.title.trim().is_empty() || input.slug.trim().is_empty() {
            return Err(AppError::BadRequest("title and slug are required".to_string()));
        }

        let post = self
            .entities
            .add(serde_json::to_value(&input).map_err(anyhow::Error::from)?)
            .await?;
        info!(id = %post.id, slug = %post.slug, "blog post created");
        Ok(post)
    }

    pub async fn update(&self, id: &str, input: UpdateBlogPost) -> AppResult<BlogPost> {
        let post = self
            .entities
            .update(id, serde_json::to_value(&input).map_err(anyhow::Error::from)?)
            .await?;
        info!(id = %id, "blog post updated");
        Ok(post)
    }

    pub async fn delete(&self, id: &str) -> AppResult<String> {
        self.entities.delete(id).await
    }
}

impl std::fmt::Debug for BlogService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BlogService").finish()
    }
}
