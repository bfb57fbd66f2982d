//! Event domain module.
//!
//! Handles event creation by managers and the search surface members
//! browse.
//!
//! # Module Structure
//!
//! - `aggregate` - Event aggregate entity

mod aggregate;

pub use aggregate::{Event, EventUpdate};
