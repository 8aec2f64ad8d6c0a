//! HTTP route handlers.

pub mod admin;
pub mod approval;
pub mod banquet;
pub mod blog;
pub mod enquiry;
pub mod health;
pub mod helpers;
pub mod vendor;

use axum::Router;

use crate::state::AppState;

/// Assemble every resource router. Middleware layers are added by the
/// binary (and omitted by the tests).
pub fn router() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(banquet::router())
        .merge(vendor::router())
        .merge(admin::router())
        .merge(approval::router())
        .merge(enquiry::router())
        .merge(blog::router())
}
