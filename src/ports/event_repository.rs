//! Event repository port.
//!
//! Defines the contract for persisting and querying Event aggregates.

use crate::domain::event::Event;
use crate::domain::foundation::{DomainError, EmailAddress, EventId};
use async_trait::async_trait;

/// Repository port for Event aggregate persistence and listing.
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Save a new event.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn insert(&self, event: &Event) -> Result<(), DomainError>;

    /// Update an existing event.
    ///
    /// # Errors
    ///
    /// - `EventNotFound` if the event doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn update(&self, event: &Event) -> Result<(), DomainError>;

    /// Delete an event.
    ///
    /// # Errors
    ///
    /// - `EventNotFound` if the event doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn delete(&self, id: &EventId) -> Result<(), DomainError>;

    /// Find an event by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &EventId) -> Result<Option<Event>, DomainError>;

    /// List all events, newest first.
    async fn list_all(&self) -> Result<Vec<Event>, DomainError>;

    /// List events created by the given email, newest first.
    async fn list_by_creator(&self, created_by: &EmailAddress)
        -> Result<Vec<Event>, DomainError>;

    /// Search events by case-insensitive substring over title or location,
    /// newest first.
    ///
    /// A blank term returns all events.
    async fn search(&self, term: &str) -> Result<Vec<Event>, DomainError>;
}
