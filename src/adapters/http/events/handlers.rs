//! HTTP handlers for event endpoints.

use axum::extract::{Json, Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use super::super::error::ApiError;
use super::super::middleware::{require_role, RequireAuth};
use super::super::state::AppState;
use crate::application::{CreateEventCommand, DeleteEventCommand, UpdateEventCommand};
use crate::domain::foundation::{ClubId, EventId};
use crate::domain::user::Operation;

use super::dto::{CreateEventRequest, EventResponse, EventSearchQuery, UpdateEventRequest};

fn parse_event_id(id: &str) -> Result<EventId, ApiError> {
    id.parse()
        .map_err(|_| ApiError::bad_request("Malformed event id"))
}

/// POST /api/events - manager: create an event.
pub async fn create_event(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Json(body): Json<CreateEventRequest>,
) -> Result<impl IntoResponse, ApiError> {
    require_role(&state, &user, Operation::CreateEvent).await?;

    let club_id = body
        .club_id
        .map(|id| {
            id.parse::<ClubId>()
                .map_err(|_| ApiError::bad_request("Malformed club id"))
        })
        .transpose()?;

    let event = state
        .create_event_handler()
        .handle(CreateEventCommand {
            title: body.title,
            description: body.description,
            location: body.location,
            event_date: body.event_date,
            is_paid: body.is_paid,
            fee: body.fee,
            club_id,
            created_by: user.email,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(EventResponse::from(event))))
}

/// GET /api/events - public: all events.
pub async fn list_events(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let events = state.event_queries().list_all().await?;
    Ok(Json(to_responses(events)))
}

/// GET /api/events/mine - manager: events the caller created.
pub async fn list_my_events(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> Result<impl IntoResponse, ApiError> {
    require_role(&state, &user, Operation::ListOwnEvents).await?;

    let events = state.event_queries().list_mine(&user.email).await?;
    Ok(Json(to_responses(events)))
}

/// GET /api/events/search?search= - public: substring search.
pub async fn search_events(
    State(state): State<AppState>,
    Query(query): Query<EventSearchQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let events = state.event_queries().search(&query.search).await?;
    Ok(Json(to_responses(events)))
}

/// GET /api/events/:id - public: one event.
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let event = state.event_queries().get(&parse_event_id(&id)?).await?;
    Ok(Json(EventResponse::from(event)))
}

/// PATCH /api/events/:id - manager (creator): partial update.
pub async fn update_event(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<String>,
    Json(body): Json<UpdateEventRequest>,
) -> Result<impl IntoResponse, ApiError> {
    require_role(&state, &user, Operation::UpdateEvent).await?;

    let event = state
        .update_event_handler()
        .handle(UpdateEventCommand {
            event_id: parse_event_id(&id)?,
            caller_email: user.email,
            update: body.into(),
        })
        .await?;

    Ok(Json(EventResponse::from(event)))
}

/// DELETE /api/events/:id - manager (creator): delete.
pub async fn delete_event(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    require_role(&state, &user, Operation::DeleteEvent).await?;

    state
        .delete_event_handler()
        .handle(DeleteEventCommand {
            event_id: parse_event_id(&id)?,
            caller_email: user.email,
        })
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

fn to_responses(events: Vec<crate::domain::event::Event>) -> Vec<EventResponse> {
    events.into_iter().map(EventResponse::from).collect()
}
