//! Axum router for club endpoints.

use axum::{
    routing::{get, patch},
    Router,
};

use super::super::state::AppState;
use super::handlers::{
    club_stats, create_club, delete_club, get_club, list_all_clubs, list_approved_clubs,
    list_featured_clubs, list_my_clubs, review_club, search_clubs, update_club,
};

/// Club API routes, mounted at `/api/clubs`.
///
/// - `POST /` - manager: create (pending review)
/// - `GET /` - admin: all clubs
/// - `GET /approved` - public directory, newest first
/// - `GET /featured` - public: first six approved
/// - `GET /mine` - manager: own clubs
/// - `GET /search` - public: filter + sort
/// - `GET /:id` - public: one club
/// - `PATCH /:id` - manager (owner): update
/// - `PATCH /:id/status` - admin: approve/reject
/// - `DELETE /:id` - manager (owner): delete
/// - `GET /:id/stats` - admin: counters
pub fn club_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_all_clubs).post(create_club))
        .route("/approved", get(list_approved_clubs))
        .route("/featured", get(list_featured_clubs))
        .route("/mine", get(list_my_clubs))
        .route("/search", get(search_clubs))
        .route("/:id", get(get_club).patch(update_club).delete(delete_club))
        .route("/:id/status", patch(review_club))
        .route("/:id/stats", get(club_stats))
}
