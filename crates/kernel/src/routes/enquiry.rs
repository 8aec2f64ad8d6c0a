//! Enquiry API routes: public lead capture, admin lead review.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::response::Response;
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::models::CreateEnquiry;
use crate::state::AppState;

use super::helpers;

/// Create the enquiry router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/enquiries", get(list_enquiries))
        .route("/api/enquiry", post(submit_enquiry))
        .route("/api/enquiry", delete(delete_enquiry))
}

#[derive(Deserialize)]
struct IdQuery {
    id: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListQuery {
    listing_id: Option<String>,
}

async fn list_enquiries(
    State(state): State<AppState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> AppResult<Response> {
    let Query(query) = query.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let enquiries = match query.listing_id {
        Some(listing_id) => state.enquiries().get_by_listing(&listing_id).await?,
        None => state.enquiries().get_all(false).await?.as_ref().clone(),
    };

    Ok(helpers::ok(enquiries))
}

async fn submit_enquiry(
    State(state): State<AppState>,
    input: Result<Json<CreateEnquiry>, JsonRejection>,
) -> AppResult<Response> {
    let Json(input) = input.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let enquiry = state.enquiries().submit(input).await?;
    Ok(helpers::created(enquiry))
}

async fn delete_enquiry(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
) -> AppResult<Response> {
    let id = helpers::require_id(query.id)?;
    let id = state.enquiries().delete(&id).await?;
    Ok(helpers::ok(serde_json::json!({ "id": id })))
}
