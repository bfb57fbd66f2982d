//! Registration-specific error types.
//!
//! Errors related to registering for events and canceling registrations.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | NotFound | 404 |
//! | NotRegistered | 404 |
//! | EventNotFound | 404 |
//! | AlreadyRegistered | 409 |
//! | InvalidState | 409 |
//! | Infrastructure | 500 |

use crate::domain::foundation::{DomainError, EmailAddress, ErrorCode, EventId, RegistrationId};

/// Registration-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationError {
    /// Registration was not found.
    NotFound(RegistrationId),

    /// Member holds no live registration for this event.
    NotRegistered {
        event_id: EventId,
        member_email: EmailAddress,
    },

    /// The event being registered for does not exist.
    EventNotFound(EventId),

    /// Member already holds a live registration for this event.
    AlreadyRegistered {
        event_id: EventId,
        member_email: EmailAddress,
    },

    /// Invalid state for the requested operation.
    InvalidState {
        current: String,
        attempted: String,
    },

    /// Infrastructure error.
    Infrastructure(String),
}

impl RegistrationError {
    // Constructor functions for cleaner error creation

    pub fn not_found(id: RegistrationId) -> Self {
        RegistrationError::NotFound(id)
    }

    pub fn not_registered(event_id: EventId, member_email: EmailAddress) -> Self {
        RegistrationError::NotRegistered {
            event_id,
            member_email,
        }
    }

    pub fn event_not_found(event_id: EventId) -> Self {
        RegistrationError::EventNotFound(event_id)
    }

    pub fn already_registered(event_id: EventId, member_email: EmailAddress) -> Self {
        RegistrationError::AlreadyRegistered {
            event_id,
            member_email,
        }
    }

    pub fn invalid_state(current: impl Into<String>, attempted: impl Into<String>) -> Self {
        RegistrationError::InvalidState {
            current: current.into(),
            attempted: attempted.into(),
        }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        RegistrationError::Infrastructure(message.into())
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            RegistrationError::NotFound(_) | RegistrationError::NotRegistered { .. } => {
                ErrorCode::RegistrationNotFound
            }
            RegistrationError::EventNotFound(_) => ErrorCode::EventNotFound,
            RegistrationError::AlreadyRegistered { .. } => ErrorCode::RegistrationExists,
            RegistrationError::InvalidState { .. } => ErrorCode::InvalidStateTransition,
            RegistrationError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    /// Returns a user-friendly error message.
    pub fn message(&self) -> String {
        match self {
            RegistrationError::NotFound(id) => format!("Registration not found: {}", id),
            RegistrationError::NotRegistered { event_id, .. } => {
                format!("Not registered for event {}", event_id)
            }
            RegistrationError::EventNotFound(event_id) => {
                format!("Event not found: {}", event_id)
            }
            RegistrationError::AlreadyRegistered { event_id, .. } => {
                format!("Already registered for event {}", event_id)
            }
            RegistrationError::InvalidState { current, attempted } => {
                format!("Cannot {} registration in {} state", attempted, current)
            }
            RegistrationError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }

    /// Returns true if this error should trigger a retry.
    pub fn is_retryable(&self) -> bool {
        matches!(self, RegistrationError::Infrastructure(_))
    }
}

impl std::fmt::Display for RegistrationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for RegistrationError {}

impl From<DomainError> for RegistrationError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::InvalidStateTransition => RegistrationError::InvalidState {
                current: "unknown".to_string(),
                attempted: err.to_string(),
            },
            _ => RegistrationError::Infrastructure(err.to_string()),
        }
    }
}

impl From<RegistrationError> for DomainError {
    fn from(err: RegistrationError) -> Self {
        DomainError::new(err.code(), err.message())
    }
}
