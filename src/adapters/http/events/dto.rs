//! HTTP DTOs for event endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::event::{Event, EventUpdate};
use crate::domain::foundation::Timestamp;

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to create an event.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEventRequest {
    pub title: String,
    pub description: String,
    pub location: String,
    pub event_date: Timestamp,
    #[serde(default)]
    pub is_paid: bool,
    #[serde(default)]
    pub fee: i64,
    #[serde(default)]
    pub club_id: Option<String>,
}

/// Partial update; absent fields keep their stored value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateEventRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub event_date: Option<Timestamp>,
    pub is_paid: Option<bool>,
    pub fee: Option<i64>,
}

impl From<UpdateEventRequest> for EventUpdate {
    fn from(req: UpdateEventRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            location: req.location,
            event_date: req.event_date,
            is_paid: req.is_paid,
            fee: req.fee,
        }
    }
}

/// Query string for event search.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventSearchQuery {
    #[serde(default)]
    pub search: String,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// An event as returned by the API.
#[derive(Debug, Clone, Serialize)]
pub struct EventResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub location: String,
    pub event_date: String,
    pub is_paid: bool,
    pub fee: i64,
    pub club_id: Option<String>,
    pub created_by: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Event> for EventResponse {
    fn from(event: Event) -> Self {
        Self {
            id: event.id.to_string(),
            title: event.title,
            description: event.description,
            location: event.location,
            event_date: event.event_date.as_datetime().to_rfc3339(),
            is_paid: event.is_paid,
            fee: event.fee,
            club_id: event.club_id.map(|id| id.to_string()),
            created_by: event.created_by.to_string(),
            created_at: event.created_at.as_datetime().to_rfc3339(),
            updated_at: event.updated_at.as_datetime().to_rfc3339(),
        }
    }
}
