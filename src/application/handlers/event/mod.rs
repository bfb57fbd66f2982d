//! Event handlers - posting, editing, and browsing events.

mod create_event;
mod delete_event;
mod event_queries;
mod update_event;

pub use create_event::{CreateEventCommand, CreateEventHandler};
pub use delete_event::{DeleteEventCommand, DeleteEventHandler};
pub use event_queries::EventQueries;
pub use update_event::{UpdateEventCommand, UpdateEventHandler};
