//! Query handlers for registration reads.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, EmailAddress, EventId};
use crate::domain::registration::EventRegistration;
use crate::ports::{RegistrationRepository, RegistrationWithEvent};

/// Read-side handler for a member's registrations.
pub struct RegistrationQueries {
    registrations: Arc<dyn RegistrationRepository>,
}

impl RegistrationQueries {
    pub fn new(registrations: Arc<dyn RegistrationRepository>) -> Self {
        Self { registrations }
    }

    /// The member's live registration for one event, if any.
    pub async fn my_registration(
        &self,
        event_id: &EventId,
        member_email: &EmailAddress,
    ) -> Result<Option<EventRegistration>, DomainError> {
        self.registrations.find_live(event_id, member_email).await
    }

    /// All of the member's registrations, newest first.
    pub async fn list_mine(
        &self,
        member_email: &EmailAddress,
    ) -> Result<Vec<RegistrationWithEvent>, DomainError> {
        self.registrations.list_by_member(member_email).await
    }
}
