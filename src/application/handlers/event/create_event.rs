//! CreateEventHandler - Command handler for a manager posting an event.

use std::sync::Arc;

use crate::domain::event::Event;
use crate::domain::foundation::{ClubId, DomainError, EmailAddress, EventId, Timestamp};
use crate::ports::EventRepository;

/// Command to create an event.
#[derive(Debug, Clone)]
pub struct CreateEventCommand {
    pub title: String,
    pub description: String,
    pub location: String,
    pub event_date: Timestamp,
    pub is_paid: bool,
    pub fee: i64,
    pub club_id: Option<ClubId>,
    pub created_by: EmailAddress,
}

/// Handler for event creation.
pub struct CreateEventHandler {
    events: Arc<dyn EventRepository>,
}

impl CreateEventHandler {
    pub fn new(events: Arc<dyn EventRepository>) -> Self {
        Self { events }
    }

    pub async fn handle(&self, cmd: CreateEventCommand) -> Result<Event, DomainError> {
        let event = Event::create(
            EventId::new(),
            cmd.title,
            cmd.description,
            cmd.location,
            cmd.event_date,
            cmd.is_paid,
            cmd.fee,
            cmd.club_id,
            cmd.created_by,
        )?;

        self.events.insert(&event).await?;
        Ok(event)
    }
}
