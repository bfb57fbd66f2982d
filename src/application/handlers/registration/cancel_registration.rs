//! CancelRegistrationHandler - Command handler for a member giving up
//! their spot at an event.

use std::sync::Arc;

use crate::domain::foundation::{EmailAddress, EventId};
use crate::domain::registration::{EventRegistration, RegistrationError};
use crate::ports::RegistrationRepository;

/// Command to cancel a live registration.
#[derive(Debug, Clone)]
pub struct CancelRegistrationCommand {
    pub event_id: EventId,
    pub member_email: EmailAddress,
}

/// Handler for registration cancellation.
///
/// The member addresses the event, not the registration row; the handler
/// resolves their live registration and cancels it. A member with no
/// live registration gets a not-registered error.
pub struct CancelRegistrationHandler {
    registrations: Arc<dyn RegistrationRepository>,
}

impl CancelRegistrationHandler {
    pub fn new(registrations: Arc<dyn RegistrationRepository>) -> Self {
        Self { registrations }
    }

    pub async fn handle(
        &self,
        cmd: CancelRegistrationCommand,
    ) -> Result<EventRegistration, RegistrationError> {
        let mut registration = self
            .registrations
            .find_live(&cmd.event_id, &cmd.member_email)
            .await?
            .ok_or_else(|| {
                RegistrationError::not_registered(cmd.event_id.clone(), cmd.member_email.clone())
            })?;

        registration.cancel()?;
        self.registrations.update(&registration).await?;

        Ok(registration)
    }
}
