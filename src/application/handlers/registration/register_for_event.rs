//! RegisterForEventHandler - Command handler for a member taking a spot
//! at an event.

use std::sync::Arc;

use crate::domain::foundation::{EmailAddress, ErrorCode, EventId, RegistrationId};
use crate::domain::registration::{EventRegistration, RegistrationError};
use crate::ports::{EventRepository, RegistrationRepository};

/// Command to register for an event.
#[derive(Debug, Clone)]
pub struct RegisterForEventCommand {
    pub event_id: EventId,
    pub member_email: EmailAddress,
}

/// Handler for event registration.
///
/// Duplicate live registrations are rejected by the storage layer's
/// partial uniqueness, so there is no read-then-write race here.
pub struct RegisterForEventHandler {
    events: Arc<dyn EventRepository>,
    registrations: Arc<dyn RegistrationRepository>,
}

impl RegisterForEventHandler {
    pub fn new(
        events: Arc<dyn EventRepository>,
        registrations: Arc<dyn RegistrationRepository>,
    ) -> Self {
        Self {
            events,
            registrations,
        }
    }

    pub async fn handle(
        &self,
        cmd: RegisterForEventCommand,
    ) -> Result<EventRegistration, RegistrationError> {
        // The event must exist
        if self.events.find_by_id(&cmd.event_id).await?.is_none() {
            return Err(RegistrationError::event_not_found(cmd.event_id));
        }

        let registration = EventRegistration::register(
            RegistrationId::new(),
            cmd.event_id.clone(),
            cmd.member_email.clone(),
        );

        if let Err(err) = self.registrations.insert(&registration).await {
            if err.code == ErrorCode::RegistrationExists {
                return Err(RegistrationError::already_registered(
                    cmd.event_id,
                    cmd.member_email,
                ));
            }
            return Err(err.into());
        }

        Ok(registration)
    }
}
