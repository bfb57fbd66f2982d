//! Axum router for membership endpoints.

use axum::{
    routing::{get, patch},
    Router,
};

use super::super::state::AppState;
use super::handlers::{
    expire_membership, join_club, list_managed_memberships, list_my_memberships, my_membership,
};

/// Membership API routes, mounted at `/api/memberships`.
///
/// - `POST /` - member: join a club
/// - `GET /` - member: own memberships
/// - `GET /my` - member: own membership for one club
/// - `GET /managed` - manager: memberships across own clubs
/// - `PATCH /:id/expire` - manager (owner): force-expire
pub fn membership_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_my_memberships).post(join_club))
        .route("/my", get(my_membership))
        .route("/managed", get(list_managed_memberships))
        .route("/:id/expire", patch(expire_membership))
}
