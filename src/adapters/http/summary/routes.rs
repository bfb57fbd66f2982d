//! Axum router for summary endpoints.

use axum::{routing::get, Router};

use super::super::state::AppState;
use super::handlers::{admin_summary, manager_summary, member_summary};

/// Summary API routes, mounted at `/api/summary`.
pub fn summary_routes() -> Router<AppState> {
    Router::new()
        .route("/admin", get(admin_summary))
        .route("/manager", get(manager_summary))
        .route("/member", get(member_summary))
}
