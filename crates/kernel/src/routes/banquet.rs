//! Banquet venue API routes.
//!
//! Public listing/facets/detail endpoints plus the admin-facing
//! multipart create/update and delete.

use axum::extract::multipart::Multipart;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::response::Response;
use axum::routing::{delete, get, post, put};
use axum::Router;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::listing::{self, FilterState, ListingItem};
use crate::models::{CreateBanquet, UpdateBanquet};
use crate::state::AppState;

use super::helpers::{self, read_multipart};

/// Bounding box applied to uploaded listing images.
const IMAGE_MAX_WIDTH: u32 = 1600;
const IMAGE_MAX_HEIGHT: u32 = 1200;

/// Create the banquet router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/banquets", get(list_banquets))
        .route("/api/banquets/facets", get(banquet_facets))
        .route("/api/banquet", get(get_banquet))
        .route("/api/banquet", post(create_banquet))
        .route("/api/banquet", put(update_banquet))
        .route("/api/banquet", delete(delete_banquet))
}

#[derive(Deserialize)]
struct IdQuery {
    id: Option<String>,
}

/// Filtered, display-ordered active venues.
async fn list_banquets(
    State(state): State<AppState>,
    query: Result<Query<FilterState>, QueryRejection>,
) -> AppResult<Response> {
    let Query(filters) = query.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let active = state.banquets().get_active().await?;
    let items: Vec<ListingItem> = active.into_iter().map(Into::into).collect();

    let filtered = listing::apply_filters(&items, &filters);
    let ordered = listing::order_for_display(filtered);

    Ok(helpers::ok(ordered))
}

/// Facet options derived from the full active collection.
///
/// Deliberately filter-insensitive: options must not shrink while the
/// visitor narrows results.
async fn banquet_facets(State(state): State<AppState>) -> AppResult<Response> {
    let active = state.banquets().get_active().await?;
    let items: Vec<ListingItem> = active.into_iter().map(Into::into).collect();

    Ok(helpers::ok(listing::derive_facets(&items)))
}

async fn get_banquet(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
) -> AppResult<Response> {
    let id = helpers::require_id(query.id)?;
    let banquet = state.banquets().get_by_id(&id).await?;
    Ok(helpers::ok(banquet))
}

async fn create_banquet(
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<Response> {
    let mut payload = read_multipart(multipart).await?;
    let mut input: CreateBanquet = helpers::parse_data(&mut payload)?;

    if let Some(image) = payload.image {
        let url = state
            .images()
            .upload(&image, IMAGE_MAX_WIDTH, IMAGE_MAX_HEIGHT)
            .await
            .map_err(AppError::Internal)?;
        input.image_url = Some(url);
    }

    let banquet = state.banquets().create(input).await?;
    Ok(helpers::created(banquet))
}

async fn update_banquet(
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<Response> {
    let mut payload = read_multipart(multipart).await?;

    let mut data = payload
        .data
        .take()
        .ok_or_else(|| AppError::BadRequest("multipart data part is required".to_string()))?;
    let id = data
        .as_object_mut()
        .and_then(|map| map.remove("id"))
        .and_then(|v| v.as_str().map(str::to_string))
        .ok_or_else(|| AppError::BadRequest("id is required".to_string()))?;

    let mut input: UpdateBanquet = serde_json::from_value(data)
        .map_err(|e| AppError::BadRequest(format!("invalid payload: {e}")))?;

    if let Some(image) = payload.image {
        let current = state.banquets().get_by_id(&id).await?;
        let url = match current.image_url.as_deref() {
            Some(previous) => state
                .images()
                .replace(&image, previous, IMAGE_MAX_WIDTH, IMAGE_MAX_HEIGHT)
                .await,
            None => state
                .images()
                .upload(&image, IMAGE_MAX_WIDTH, IMAGE_MAX_HEIGHT)
                .await,
        }
        .map_err(AppError::Internal)?;
        input.image_url = Some(url);
    }

    let banquet = state.banquets().update(&id, input).await?;
    Ok(helpers::ok(banquet))
}

async fn delete_banquet(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
) -> AppResult<Response> {
    let id = helpers::require_id(query.id)?;
    let id = state.banquets().delete(&id).await?;
    Ok(helpers::ok(serde_json::json!({ "id": id })))
}
