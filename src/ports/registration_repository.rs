//! Event registration repository port.
//!
//! Defines the contract for persisting and querying EventRegistration
//! aggregates.
//!
//! # Design
//!
//! - **Storage-enforced uniqueness**: `insert` relies on a partial unique
//!   index over live registrations; a duplicate live registration must
//!   surface as `RegistrationExists`
//! - **Joined views for lists**: the member's registration list carries
//!   the event title, date, and location for display

use crate::domain::foundation::{DomainError, EmailAddress, EventId, RegistrationId, Timestamp};
use crate::domain::registration::EventRegistration;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Repository port for EventRegistration persistence.
#[async_trait]
pub trait RegistrationRepository: Send + Sync {
    /// Save a new registration.
    ///
    /// # Errors
    ///
    /// - `RegistrationExists` if the member already holds a live
    ///   registration for this event
    /// - `DatabaseError` on persistence failure
    async fn insert(&self, registration: &EventRegistration) -> Result<(), DomainError>;

    /// Update an existing registration.
    ///
    /// # Errors
    ///
    /// - `RegistrationNotFound` if the registration doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn update(&self, registration: &EventRegistration) -> Result<(), DomainError>;

    /// Find a registration by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(
        &self,
        id: &RegistrationId,
    ) -> Result<Option<EventRegistration>, DomainError>;

    /// Find the live registration for a member at an event.
    ///
    /// Returns `None` when the member holds no live registration there.
    async fn find_live(
        &self,
        event_id: &EventId,
        member_email: &EmailAddress,
    ) -> Result<Option<EventRegistration>, DomainError>;

    /// List the member's registrations across all events, newest first.
    async fn list_by_member(
        &self,
        member_email: &EmailAddress,
    ) -> Result<Vec<RegistrationWithEvent>, DomainError>;
}

/// Registration joined with the event it is for, for list displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationWithEvent {
    /// The registration itself.
    pub registration: EventRegistration,

    /// Title of the event.
    pub event_title: String,

    /// When the event takes place.
    pub event_date: Timestamp,

    /// Where the event takes place.
    pub event_location: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trait object safety test
    #[test]
    fn registration_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn RegistrationRepository) {}
    }
}
