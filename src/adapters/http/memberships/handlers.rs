//! HTTP handlers for membership endpoints.

use axum::extract::{Json, Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use super::super::error::ApiError;
use super::super::middleware::{require_role, RequireAuth};
use super::super::state::AppState;
use crate::application::{ExpireMembershipCommand, JoinClubCommand};
use crate::domain::foundation::{ClubId, MembershipId};
use crate::domain::user::Operation;

use super::dto::{
    JoinClubRequest, MembershipResponse, MembershipWithClubResponse, MyMembershipQuery,
};

/// POST /api/memberships - member: join a club.
///
/// 400 without a club id, 404 when the club is gone, 409 when a live
/// membership already exists, 201 otherwise. A free club activates
/// immediately; a paid one waits in pending_payment for checkout.
pub async fn join_club(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    body: Option<Json<JoinClubRequest>>,
) -> Result<impl IntoResponse, ApiError> {
    let club_id: ClubId = body
        .and_then(|Json(b)| b.club_id)
        .ok_or_else(|| ApiError::bad_request("club_id is required"))?
        .parse()
        .map_err(|_| ApiError::bad_request("Malformed club id"))?;

    let result = state
        .join_club_handler()
        .handle(JoinClubCommand {
            club_id,
            member_email: user.email,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MembershipResponse::from(result.membership)),
    ))
}

/// GET /api/memberships/my?club_id= - member: own membership in one club.
///
/// Null body when the member has no live membership there.
pub async fn my_membership(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Query(query): Query<MyMembershipQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let club_id: ClubId = query
        .club_id
        .parse()
        .map_err(|_| ApiError::bad_request("Malformed club id"))?;

    let membership = state
        .membership_queries()
        .my_membership(&club_id, &user.email)
        .await?;

    Ok(Json(membership.map(MembershipResponse::from)))
}

/// GET /api/memberships - member: all own memberships with club details.
pub async fn list_my_memberships(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> Result<impl IntoResponse, ApiError> {
    let rows = state.membership_queries().list_mine(&user.email).await?;
    let response: Vec<MembershipWithClubResponse> = rows
        .into_iter()
        .map(MembershipWithClubResponse::from)
        .collect();
    Ok(Json(response))
}

/// GET /api/memberships/managed - manager: memberships across own clubs.
pub async fn list_managed_memberships(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> Result<impl IntoResponse, ApiError> {
    require_role(&state, &user, Operation::ListManagedMemberships).await?;

    let rows = state.membership_queries().list_managed(&user.email).await?;
    let response: Vec<MembershipWithClubResponse> = rows
        .into_iter()
        .map(MembershipWithClubResponse::from)
        .collect();
    Ok(Json(response))
}

/// PATCH /api/memberships/:id/expire - manager (club owner): force-expire.
pub async fn expire_membership(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    require_role(&state, &user, Operation::ExpireMembership).await?;

    let membership_id: MembershipId = id
        .parse()
        .map_err(|_| ApiError::bad_request("Malformed membership id"))?;

    let membership = state
        .expire_membership_handler()
        .handle(ExpireMembershipCommand {
            membership_id,
            manager_email: user.email,
        })
        .await?;

    Ok(Json(MembershipResponse::from(membership)))
}
