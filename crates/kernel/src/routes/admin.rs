//! Admin account API routes.
//!
//! Account CRUD plus the action audit: PATCH records an action, and the
//! actions endpoint reads the log with an optional inclusive date range.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::response::Response;
use axum::routing::{delete, get, patch, post, put};
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::models::{CreateAdmin, UpdateAdmin};
use crate::state::AppState;

use super::helpers;

/// Create the admin router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/admins", get(list_admins))
        .route("/api/admin", get(get_admin))
        .route("/api/admin", post(create_admin))
        .route("/api/admin", put(update_admin))
        .route("/api/admin", delete(delete_admin))
        .route("/api/admin", patch(log_action))
        .route("/api/admin/actions", get(get_action_logs))
}

#[derive(Deserialize)]
struct IdQuery {
    id: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ActionsQuery {
    id: Option<String>,
    start_date: Option<DateTime<Utc>>,
    end_date: Option<DateTime<Utc>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LogActionRequest {
    admin_id: String,
    action: String,
    target: String,
}

async fn list_admins(State(state): State<AppState>) -> AppResult<Response> {
    let admins = state.admins().get_all(false).await?;
    Ok(helpers::ok(admins.as_ref()))
}

async fn get_admin(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
) -> AppResult<Response> {
    let id = helpers::require_id(query.id)?;
    let admin = state.admins().get_by_id(&id).await?;
    Ok(helpers::ok(admin))
}

async fn create_admin(
    State(state): State<AppState>,
    input: Result<Json<CreateAdmin>, JsonRejection>,
) -> AppResult<Response> {
    let Json(input) = input.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let admin = state.admins().create(input).await?;
    Ok(helpers::created(admin))
}

/// Update an admin; the id travels in the body.
async fn update_admin(
    State(state): State<AppState>,
    input: Result<Json<Value>, JsonRejection>,
) -> AppResult<Response> {
    let Json(mut body) = input.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let id = body
        .as_object_mut()
        .and_then(|map| map.remove("id"))
        .and_then(|v| v.as_str().map(str::to_string))
        .ok_or_else(|| AppError::BadRequest("id is required".to_string()))?;

    let input: UpdateAdmin = serde_json::from_value(body)
        .map_err(|e| AppError::BadRequest(format!("invalid payload: {e}")))?;

    let admin = state.admins().update(&id, input).await?;
    Ok(helpers::ok(admin))
}

/// Delete an admin. Superadmin accounts are refused with 403.
async fn delete_admin(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
) -> AppResult<Response> {
    let id = helpers::require_id(query.id)?;
    let id = state.admins().delete(&id).await?;
    Ok(helpers::ok(serde_json::json!({ "id": id })))
}

/// Record one audited action against an admin.
async fn log_action(
    State(state): State<AppState>,
    input: Result<Json<LogActionRequest>, JsonRejection>,
) -> AppResult<Response> {
    let Json(input) = input.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let entry = state
        .admins()
        .log_action(&input.admin_id, &input.action, &input.target)
        .await?;
    Ok(helpers::ok(entry))
}

/// Action log entries newest-first, optionally date-bounded (inclusive).
async fn get_action_logs(
    State(state): State<AppState>,
    query: Result<Query<ActionsQuery>, QueryRejection>,
) -> AppResult<Response> {
    let Query(query) = query.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let id = helpers::require_id(query.id)?;

    let entries = state
        .admins()
        .get_action_logs(&id, query.start_date, query.end_date)
        .await?;
    Ok(helpers::ok(entries))
}
