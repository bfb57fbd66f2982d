//! Axum router for event endpoints.

use axum::{routing::get, Router};

use super::super::state::AppState;
use super::handlers::{
    create_event, delete_event, get_event, list_events, list_my_events, search_events,
    update_event,
};

/// Event API routes, mounted at `/api/events`.
///
/// - `POST /` - manager: create
/// - `GET /` - public: all events
/// - `GET /mine` - manager: own events
/// - `GET /search` - public: substring search
/// - `GET /:id` - public: one event
/// - `PATCH /:id` - manager (creator): update
/// - `DELETE /:id` - manager (creator): delete
pub fn event_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_events).post(create_event))
        .route("/mine", get(list_my_events))
        .route("/search", get(search_events))
        .route(
            "/:id",
            get(get_event).patch(update_event).delete(delete_event),
        )
}
