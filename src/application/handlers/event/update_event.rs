//! UpdateEventHandler - Command handler for a creator editing their event.

use std::sync::Arc;

use crate::domain::event::{Event, EventUpdate};
use crate::domain::foundation::{DomainError, EmailAddress, ErrorCode, EventId, OwnedByEmail};
use crate::ports::EventRepository;

/// Command to edit an event.
#[derive(Debug, Clone)]
pub struct UpdateEventCommand {
    pub event_id: EventId,
    pub caller_email: EmailAddress,
    pub update: EventUpdate,
}

/// Handler for event edits. Only the creating manager may edit.
pub struct UpdateEventHandler {
    events: Arc<dyn EventRepository>,
}

impl UpdateEventHandler {
    pub fn new(events: Arc<dyn EventRepository>) -> Self {
        Self { events }
    }

    pub async fn handle(&self, cmd: UpdateEventCommand) -> Result<Event, DomainError> {
        let mut event = self
            .events
            .find_by_id(&cmd.event_id)
            .await?
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::EventNotFound,
                    format!("Event not found: {}", cmd.event_id),
                )
            })?;

        event.check_ownership(&cmd.caller_email)?;

        event.apply_update(cmd.update)?;
        self.events.update(&event).await?;

        Ok(event)
    }
}
