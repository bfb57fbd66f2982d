//! Axum router for event-registration endpoints.

use axum::{
    routing::{get, patch, post},
    Router,
};

use super::super::state::AppState;
use super::handlers::{cancel_registration, list_my_registrations, register, registration_status};

/// Registration API routes, mounted at `/api/event-registrations`.
///
/// - `POST /` - member: register for an event
/// - `GET /my` - member: own registrations
/// - `GET /status` - member: own registration for one event
/// - `PATCH /cancel` - member: cancel own registration
pub fn registration_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(register))
        .route("/my", get(list_my_registrations))
        .route("/status", get(registration_status))
        .route("/cancel", patch(cancel_registration))
}
