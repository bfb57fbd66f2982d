//! HTTP handlers for the role-scoped summary endpoints.

use axum::extract::{Json, State};
use axum::response::IntoResponse;

use super::super::error::ApiError;
use super::super::middleware::{require_role, RequireAuth};
use super::super::state::AppState;
use crate::domain::user::Operation;

use super::dto::{AdminSummaryResponse, ManagerSummaryResponse, MemberSummaryResponse};

/// GET /api/summary/admin - admin: platform-wide totals.
pub async fn admin_summary(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> Result<impl IntoResponse, ApiError> {
    require_role(&state, &user, Operation::AdminSummary).await?;

    let summary = state.summary_queries().admin().await?;
    Ok(Json(AdminSummaryResponse::from(summary)))
}

/// GET /api/summary/manager - manager: totals across own clubs.
pub async fn manager_summary(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> Result<impl IntoResponse, ApiError> {
    require_role(&state, &user, Operation::ManagerSummary).await?;

    let summary = state.summary_queries().manager(&user.email).await?;
    Ok(Json(ManagerSummaryResponse::from(summary)))
}

/// GET /api/summary/member - member: own activity and upcoming events.
pub async fn member_summary(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> Result<impl IntoResponse, ApiError> {
    let summary = state.summary_queries().member(&user.email).await?;
    Ok(Json(MemberSummaryResponse::from(summary)))
}
