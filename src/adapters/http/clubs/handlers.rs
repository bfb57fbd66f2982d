//! HTTP handlers for club endpoints.
//!
//! The public directory endpoints (approved, featured, search, get by id)
//! skip the role guard entirely; management endpoints check the policy
//! table, and ownership is enforced inside the application handlers.

use axum::extract::{Json, Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use super::super::error::ApiError;
use super::super::middleware::{require_role, RequireAuth};
use super::super::state::AppState;
use crate::application::{
    CreateClubCommand, DeleteClubCommand, ReviewClubCommand, UpdateClubCommand,
};
use crate::domain::club::ClubSearch;
use crate::domain::foundation::ClubId;
use crate::domain::user::Operation;

use super::dto::{
    ClubResponse, ClubStatsResponse, CreateClubRequest, ReviewClubRequest, UpdateClubRequest,
};

fn parse_club_id(id: &str) -> Result<ClubId, ApiError> {
    id.parse()
        .map_err(|_| ApiError::bad_request("Malformed club id"))
}

/// POST /api/clubs - manager: create a club (enters review as pending).
pub async fn create_club(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Json(body): Json<CreateClubRequest>,
) -> Result<impl IntoResponse, ApiError> {
    require_role(&state, &user, Operation::CreateClub).await?;

    let club = state
        .create_club_handler()
        .handle(CreateClubCommand {
            name: body.name,
            description: body.description,
            category: body.category,
            location: body.location,
            membership_fee: body.membership_fee,
            banner_url: body.banner_url,
            manager_email: user.email,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(ClubResponse::from(club))))
}

/// GET /api/clubs - admin: every club regardless of status.
pub async fn list_all_clubs(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> Result<impl IntoResponse, ApiError> {
    require_role(&state, &user, Operation::ListAllClubs).await?;

    let clubs = state.club_queries().list_all().await?;
    Ok(Json(to_responses(clubs)))
}

/// GET /api/clubs/approved - public: approved clubs, newest first.
pub async fn list_approved_clubs(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let clubs = state.club_queries().list_approved().await?;
    Ok(Json(to_responses(clubs)))
}

/// GET /api/clubs/featured - public: the first six approved clubs.
pub async fn list_featured_clubs(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let clubs = state.club_queries().list_featured().await?;
    Ok(Json(to_responses(clubs)))
}

/// GET /api/clubs/mine - manager: clubs the caller manages.
pub async fn list_my_clubs(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> Result<impl IntoResponse, ApiError> {
    require_role(&state, &user, Operation::ListOwnClubs).await?;

    let clubs = state.club_queries().list_mine(&user.email).await?;
    Ok(Json(to_responses(clubs)))
}

/// GET /api/clubs/search - public: filtered approved-club directory.
pub async fn search_clubs(
    State(state): State<AppState>,
    Query(query): Query<ClubSearch>,
) -> Result<impl IntoResponse, ApiError> {
    let clubs = state.club_queries().search(&query).await?;
    Ok(Json(to_responses(clubs)))
}

/// GET /api/clubs/:id - public: one club.
pub async fn get_club(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let club_id = parse_club_id(&id)?;
    let club = state.club_queries().get(&club_id).await?;
    Ok(Json(ClubResponse::from(club)))
}

/// PATCH /api/clubs/:id - manager (owner): partial update.
pub async fn update_club(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<String>,
    Json(body): Json<UpdateClubRequest>,
) -> Result<impl IntoResponse, ApiError> {
    require_role(&state, &user, Operation::UpdateClub).await?;

    let club = state
        .update_club_handler()
        .handle(UpdateClubCommand {
            club_id: parse_club_id(&id)?,
            manager_email: user.email,
            update: body.into(),
        })
        .await?;

    Ok(Json(ClubResponse::from(club)))
}

/// PATCH /api/clubs/:id/status - admin: approve or reject.
pub async fn review_club(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<String>,
    Json(body): Json<ReviewClubRequest>,
) -> Result<impl IntoResponse, ApiError> {
    require_role(&state, &user, Operation::ReviewClub).await?;

    let club = state
        .review_club_handler()
        .handle(ReviewClubCommand {
            club_id: parse_club_id(&id)?,
            decision: body.decision,
        })
        .await?;

    Ok(Json(ClubResponse::from(club)))
}

/// DELETE /api/clubs/:id - manager (owner): delete.
pub async fn delete_club(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    require_role(&state, &user, Operation::DeleteClub).await?;

    state
        .delete_club_handler()
        .handle(DeleteClubCommand {
            club_id: parse_club_id(&id)?,
            manager_email: user.email,
        })
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/clubs/:id/stats - admin: member and event counters.
pub async fn club_stats(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    require_role(&state, &user, Operation::ClubStats).await?;

    let stats = state
        .summary_queries()
        .club_stats(&parse_club_id(&id)?)
        .await?;

    Ok(Json(ClubStatsResponse::from(stats)))
}

fn to_responses(clubs: Vec<crate::domain::club::Club>) -> Vec<ClubResponse> {
    clubs.into_iter().map(ClubResponse::from).collect()
}
