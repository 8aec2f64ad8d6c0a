//! Approval workflow API routes.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::response::Response;
use axum::routing::{delete, get, patch, post};
use axum::{Json, Router};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::models::{ApprovalStatus, CreateApprovalRequest};
use crate::state::AppState;

use super::helpers;

/// Create the approval router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/approvals", get(list_approvals))
        .route("/api/approval", get(get_approval))
        .route("/api/approval", post(submit_approval))
        .route("/api/approval", patch(process_approval))
        .route("/api/approval", delete(delete_approval))
}

#[derive(Deserialize)]
struct IdQuery {
    id: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListQuery {
    status: Option<ApprovalStatus>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProcessRequest {
    id: String,
    approve: bool,
    notes: Option<String>,
}

/// List requests, optionally narrowed to one status.
///
/// An unrecognized status value is a 400, not an empty result.
async fn list_approvals(
    State(state): State<AppState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> AppResult<Response> {
    let Query(query) = query.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let all = state.approvals().get_all(false).await?;
    let requests: Vec<_> = match query.status {
        Some(status) => all.iter().filter(|r| r.status == status).cloned().collect(),
        None => all.as_ref().clone(),
    };

    Ok(helpers::ok(requests))
}

async fn get_approval(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
) -> AppResult<Response> {
    let id = helpers::require_id(query.id)?;
    let request = state.approvals().get_by_id(&id).await?;
    Ok(helpers::ok(request))
}

async fn submit_approval(
    State(state): State<AppState>,
    input: Result<Json<CreateApprovalRequest>, JsonRejection>,
) -> AppResult<Response> {
    let Json(input) = input.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let request = state.approvals().submit(input).await?;
    Ok(helpers::created(request))
}

/// Decide a pending request. Re-processing a decided one is a 409.
async fn process_approval(
    State(state): State<AppState>,
    input: Result<Json<ProcessRequest>, JsonRejection>,
) -> AppResult<Response> {
    let Json(input) = input.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let request = state
        .approvals()
        .process(&input.id, input.approve, input.notes)
        .await?;
    Ok(helpers::ok(request))
}

async fn delete_approval(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
) -> AppResult<Response> {
    let id = helpers::require_id(query.id)?;
    let id = state.approvals().delete(&id).await?;
    Ok(helpers::ok(serde_json::json!({ "id": id })))
}
