//! Event registration aggregate entity.
//!
//! A registration records one member holding a spot at one event. A
//! member holds at most one live registration per event, enforced by a
//! partial unique constraint at the database level.

use crate::domain::foundation::{
    DomainError, EmailAddress, ErrorCode, EventId, RegistrationId, Timestamp,
};
use serde::{Deserialize, Serialize};

use super::RegistrationStatus;

/// Event registration aggregate.
///
/// # Invariants
///
/// - `id` is globally unique
/// - `(event_id, member_email)` is unique among live registrations
/// - Status transitions follow state machine rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRegistration {
    /// Unique identifier for this registration.
    pub id: RegistrationId,

    /// Event being attended.
    pub event_id: EventId,

    /// Member who registered. Email is the member's identity key.
    pub member_email: EmailAddress,

    /// Current status.
    pub status: RegistrationStatus,

    /// When the member registered.
    pub registered_at: Timestamp,

    /// When the registration was last updated.
    pub updated_at: Timestamp,
}

impl EventRegistration {
    /// Register a member for an event.
    pub fn register(id: RegistrationId, event_id: EventId, member_email: EmailAddress) -> Self {
        let now = Timestamp::now();
        Self {
            id,
            event_id,
            member_email,
            status: RegistrationStatus::Registered,
            registered_at: now,
            updated_at: now,
        }
    }

    /// True while this registration occupies the member's spot.
    pub fn is_live(&self) -> bool {
        self.status.is_live()
    }

    /// Cancel this registration.
    ///
    /// # Errors
    ///
    /// Returns error if the registration is already canceled.
    pub fn cancel(&mut self) -> Result<(), DomainError> {
        use crate::domain::foundation::StateMachine;

        self.status = self
            .status
            .transition_to(RegistrationStatus::Canceled)
            .map_err(|_| {
                DomainError::new(
                    ErrorCode::InvalidStateTransition,
                    format!(
                        "Cannot cancel registration in {:?} state",
                        self.status
                    ),
                )
            })?;
        self.updated_at = Timestamp::now();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member_email() -> EmailAddress {
        EmailAddress::new("member@example.com").unwrap()
    }

    fn test_registration() -> EventRegistration {
        EventRegistration::register(RegistrationId::new(), EventId::new(), member_email())
    }

    #[test]
    fn register_starts_live() {
        let registration = test_registration();
        assert_eq!(registration.status, RegistrationStatus::Registered);
        assert!(registration.is_live());
    }

    #[test]
    fn registered_can_cancel() {
        let mut registration = test_registration();
        assert!(registration.cancel().is_ok());
        assert_eq!(registration.status, RegistrationStatus::Canceled);
        assert!(!registration.is_live());
    }

    #[test]
    fn double_cancel_fails() {
        let mut registration = test_registration();
        registration.cancel().unwrap();

        let result = registration.cancel();
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().code, ErrorCode::InvalidStateTransition);
    }
}
