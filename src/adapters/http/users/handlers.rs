//! HTTP handlers for user endpoints.

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use super::super::error::ApiError;
use super::super::middleware::{require_role, RequireAuth};
use super::super::state::AppState;
use crate::application::{SetUserRoleCommand, SignInCommand};
use crate::domain::foundation::{DomainError, EmailAddress, ErrorCode, UserRecordId};
use crate::domain::user::Operation;

use super::dto::{RoleResponse, SetRoleRequest, SignInRequest, SignInResponse, UserResponse};

/// POST /api/users - upsert on sign-in.
///
/// 201 with the stored user on first sign-in, 200 with a "user exists"
/// message on any later one. The identity comes from the verified token.
pub async fn sign_in(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    body: Option<Json<SignInRequest>>,
) -> Result<impl IntoResponse, ApiError> {
    let display_name = body
        .and_then(|Json(b)| b.display_name)
        .or_else(|| user.display_name.clone());

    let result = state
        .sign_in_handler()
        .handle(SignInCommand {
            email: user.email,
            display_name,
        })
        .await?;

    let (status, message) = if result.created {
        (StatusCode::CREATED, "user created")
    } else {
        (StatusCode::OK, "user exists")
    };

    Ok((
        status,
        Json(SignInResponse {
            message,
            user: UserResponse::from(result.user),
        }),
    ))
}

/// GET /api/users - admin: all users.
pub async fn list_users(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> Result<impl IntoResponse, ApiError> {
    require_role(&state, &user, Operation::ListUsers).await?;

    let users = state.user_queries().list_all().await?;
    let response: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();
    Ok(Json(response))
}

/// GET /api/users/me - profile of the authenticated user.
pub async fn get_me(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> Result<impl IntoResponse, ApiError> {
    let stored = state
        .user_queries()
        .find_by_email(&user.email)
        .await?
        .ok_or_else(|| DomainError::new(ErrorCode::UserNotFound, "User has not signed in"))?;

    Ok(Json(UserResponse::from(stored)))
}

/// GET /api/users/:email/role - effective role for an email.
///
/// An email with no stored user resolves to member, never an error.
pub async fn get_role(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path(email): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let email = EmailAddress::new(&email).map_err(DomainError::from)?;
    let role = state.user_queries().role_for_email(&email).await?;

    Ok(Json(RoleResponse {
        email: email.to_string(),
        role,
    }))
}

/// PATCH /api/users/:id - admin: set a user's role.
pub async fn set_role(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<String>,
    Json(body): Json<SetRoleRequest>,
) -> Result<impl IntoResponse, ApiError> {
    require_role(&state, &user, Operation::SetUserRole).await?;

    let user_id: UserRecordId = id
        .parse()
        .map_err(|_| ApiError::bad_request("Malformed user id"))?;

    let updated = state
        .set_user_role_handler()
        .handle(SetUserRoleCommand {
            user_id,
            role: body.role,
        })
        .await?;

    Ok(Json(UserResponse::from(updated)))
}
