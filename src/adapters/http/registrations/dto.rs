//! HTTP DTOs for event-registration endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::registration::{EventRegistration, RegistrationStatus};
use crate::ports::RegistrationWithEvent;

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to register for, or cancel a registration to, an event.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegistrationRequest {
    #[serde(default)]
    pub event_id: Option<String>,
}

/// Query string for the own-registration lookup.
#[derive(Debug, Clone, Deserialize)]
pub struct RegistrationStatusQuery {
    pub event_id: String,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// A registration as returned by the API.
#[derive(Debug, Clone, Serialize)]
pub struct RegistrationResponse {
    pub id: String,
    pub event_id: String,
    pub member_email: String,
    pub status: RegistrationStatus,
    pub registered_at: String,
    pub updated_at: String,
}

impl From<EventRegistration> for RegistrationResponse {
    fn from(r: EventRegistration) -> Self {
        Self {
            id: r.id.to_string(),
            event_id: r.event_id.to_string(),
            member_email: r.member_email.to_string(),
            status: r.status,
            registered_at: r.registered_at.as_datetime().to_rfc3339(),
            updated_at: r.updated_at.as_datetime().to_rfc3339(),
        }
    }
}

/// A registration joined with its event, for list views.
#[derive(Debug, Clone, Serialize)]
pub struct RegistrationWithEventResponse {
    #[serde(flatten)]
    pub registration: RegistrationResponse,
    pub event_title: String,
    pub event_date: String,
    pub event_location: String,
}

impl From<RegistrationWithEvent> for RegistrationWithEventResponse {
    fn from(row: RegistrationWithEvent) -> Self {
        Self {
            registration: RegistrationResponse::from(row.registration),
            event_title: row.event_title,
            event_date: row.event_date.as_datetime().to_rfc3339(),
            event_location: row.event_location,
        }
    }
}
