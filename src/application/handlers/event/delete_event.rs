//! DeleteEventHandler - Command handler for a creator removing their event.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, EmailAddress, ErrorCode, EventId, OwnedByEmail};
use crate::ports::EventRepository;

/// Command to delete an event.
#[derive(Debug, Clone)]
pub struct DeleteEventCommand {
    pub event_id: EventId,
    pub caller_email: EmailAddress,
}

/// Handler for event deletion. Only the creating manager may delete.
pub struct DeleteEventHandler {
    events: Arc<dyn EventRepository>,
}

impl DeleteEventHandler {
    pub fn new(events: Arc<dyn EventRepository>) -> Self {
        Self { events }
    }

    pub async fn handle(&self, cmd: DeleteEventCommand) -> Result<(), DomainError> {
        let event = self
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

        self.events.delete(&cmd.event_id).await
    }
}
