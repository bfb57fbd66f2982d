//! Query handlers for event reads.

use std::sync::Arc;

use crate::domain::event::Event;
use crate::domain::foundation::{DomainError, EmailAddress, ErrorCode, EventId};
use crate::ports::EventRepository;

/// Read-side handler for event lookups, listings, and search.
pub struct EventQueries {
    events: Arc<dyn EventRepository>,
}

impl EventQueries {
    pub fn new(events: Arc<dyn EventRepository>) -> Self {
        Self { events }
    }

    /// One event by id.
    pub async fn get(&self, id: &EventId) -> Result<Event, DomainError> {
        self.events.find_by_id(id).await?.ok_or_else(|| {
            DomainError::new(ErrorCode::EventNotFound, format!("Event not found: {}", id))
        })
    }

    /// All events, newest first.
    pub async fn list_all(&self) -> Result<Vec<Event>, DomainError> {
        self.events.list_all().await
    }

    /// Events the manager created, newest first.
    pub async fn list_mine(&self, created_by: &EmailAddress) -> Result<Vec<Event>, DomainError> {
        self.events.list_by_creator(created_by).await
    }

    /// Substring search over title or location. A blank term lists all.
    pub async fn search(&self, term: &str) -> Result<Vec<Event>, DomainError> {
        self.events.search(term.trim()).await
    }
}
