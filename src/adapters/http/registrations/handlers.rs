//! HTTP handlers for event-registration endpoints.

use axum::extract::{Json, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use super::super::error::ApiError;
use super::super::middleware::RequireAuth;
use super::super::state::AppState;
use crate::application::{CancelRegistrationCommand, RegisterForEventCommand};
use crate::domain::foundation::EventId;

use super::dto::{
    RegistrationRequest, RegistrationResponse, RegistrationStatusQuery,
    RegistrationWithEventResponse,
};

fn event_id_from(body: Option<Json<RegistrationRequest>>) -> Result<EventId, ApiError> {
    body.and_then(|Json(b)| b.event_id)
        .ok_or_else(|| ApiError::bad_request("event_id is required"))?
        .parse()
        .map_err(|_| ApiError::bad_request("Malformed event id"))
}

/// POST /api/event-registrations - member: take a spot.
///
/// 404 when the event is gone, 409 when a live registration already
/// exists, 201 otherwise.
pub async fn register(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    body: Option<Json<RegistrationRequest>>,
) -> Result<impl IntoResponse, ApiError> {
    let registration = state
        .register_for_event_handler()
        .handle(RegisterForEventCommand {
            event_id: event_id_from(body)?,
            member_email: user.email,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(RegistrationResponse::from(registration)),
    ))
}

/// GET /api/event-registrations/my - member: own registrations.
pub async fn list_my_registrations(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> Result<impl IntoResponse, ApiError> {
    let rows = state.registration_queries().list_mine(&user.email).await?;
    let response: Vec<RegistrationWithEventResponse> = rows
        .into_iter()
        .map(RegistrationWithEventResponse::from)
        .collect();
    Ok(Json(response))
}

/// GET /api/event-registrations/status?event_id= - member: own
/// registration for one event, null when none.
pub async fn registration_status(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Query(query): Query<RegistrationStatusQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let event_id: EventId = query
        .event_id
        .parse()
        .map_err(|_| ApiError::bad_request("Malformed event id"))?;

    let registration = state
        .registration_queries()
        .my_registration(&event_id, &user.email)
        .await?;

    Ok(Json(registration.map(RegistrationResponse::from)))
}

/// PATCH /api/event-registrations/cancel - member: cancel own
/// registration. 404 when the member is not registered.
pub async fn cancel_registration(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    body: Option<Json<RegistrationRequest>>,
) -> Result<impl IntoResponse, ApiError> {
    let registration = state
        .cancel_registration_handler()
        .handle(CancelRegistrationCommand {
            event_id: event_id_from(body)?,
            member_email: user.email,
        })
        .await?;

    Ok(Json(RegistrationResponse::from(registration)))
}
