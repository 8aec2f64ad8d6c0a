//! Blog post model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A blog article.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    /// Unique identifier (UUIDv7, store-assigned).
    pub id: String,

    pub title: String,

    /// URL slug, unique among published posts.
    pub slug: String,

    pub body: String,

    #[serde(default)]
    pub author: Option<String>,

    #[serde(default)]
    pub image_url: Option<String>,

    /// Unpublished posts are only visible to admins.
    #[serde(default)]
    pub published: bool,

    pub created: DateTime<Utc>,

    pub updated: DateTime<Utc>,
}

/// Input for creating a blog post.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBlogPost {
    pub title: String,
    pub slug: String,
    pub body: String,
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub published: bool,
}

/// Input for updating a blog post. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBlogPost {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published: Option<bool>,
}
