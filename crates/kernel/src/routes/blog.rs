//! Blog API routes.
//!
//! Public index and slug lookup serve published posts; the blogpost
//! endpoints are the admin CRUD surface.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::response::Response;
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::models::{CreateBlogPost, UpdateBlogPost};
use crate::state::AppState;

use super::helpers;

/// Create the blog router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/blog", get(public_blog))
        .route("/api/blogposts", get(list_blog_posts))
        .route("/api/blogpost", post(create_blog_post))
        .route("/api/blogpost", put(update_blog_post))
        .route("/api/blogpost", delete(delete_blog_post))
}

#[derive(Deserialize)]
struct IdQuery {
    id: Option<String>,
}

#[derive(Deserialize)]
struct BlogQuery {
    slug: Option<String>,
}

/// Published posts; with `?slug=` a single post.
async fn public_blog(
    State(state): State<AppState>,
    query: Result<Query<BlogQuery>, QueryRejection>,
) -> AppResult<Response> {
    let Query(query) = query.map_err(|e| AppError::BadRequest(e.body_text()))?;

    match query.slug {
        Some(slug) => {
            let post = state.blog().get_by_slug(&slug).await?;
            Ok(helpers::ok(post))
        }
        None => {
            let posts = state.blog().get_published().await?;
            Ok(helpers::ok(posts))
        }
    }
}

/// Every post including drafts, for the admin dashboard.
async fn list_blog_posts(State(state): State<AppState>) -> AppResult<Response> {
    let posts = state.blog().get_all(false).await?;
    Ok(helpers::ok(posts.as_ref()))
}

async fn create_blog_post(
    State(state): State<AppState>,
    input: Result<Json<CreateBlogPost>, JsonRejection>,
) -> AppResult<Response> {
    let Json(input) = input.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let post = state.blog().create(input).await?;
    Ok(helpers::created(post))
}

/// Update a post; the id travels in the body.
async fn update_blog_post(
    State(state): State<AppState>,
    input: Result<Json<Value>, JsonRejection>,
) -> AppResult<Response> {
    let Json(mut body) = input.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let id = body
        .as_object_mut()
        .and_then(|map| map.remove("id"))
        .and_then(|v| v.as_str().map(str::to_string))
        .ok_or_else(|| AppError::BadRequest("id is required".to_string()))?;

    let input: UpdateBlogPost = serde_json::from_value(body)
        .map_err(|e| AppError::BadRequest(format!("invalid payload: {e}")))?;

    let post = state.blog().update(&id, input).await?;
    Ok(helpers::ok(post))
}

async fn delete_blog_post(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
) -> AppResult<Response> {
    let id = helpers::require_id(query.id)?;
    let id = state.blog().delete(&id).await?;
    Ok(helpers::ok(serde_json::json!({ "id": id })))
}
