//! Axum router for user endpoints.

use axum::{
    routing::{get, patch, post},
    Router,
};

use super::super::state::AppState;
use super::handlers::{get_me, get_role, list_users, set_role, sign_in};

/// User API routes, mounted at `/api/users`.
///
/// - `POST /` - upsert on sign-in
/// - `GET /` - admin: list all users
/// - `GET /me` - authenticated profile
/// - `GET /:email/role` - effective role lookup
/// - `PATCH /:id` - admin: set role
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(sign_in).get(list_users))
        .route("/me", get(get_me))
        .route("/:email/role", get(get_role))
        .route("/:id", patch(set_role))
}
