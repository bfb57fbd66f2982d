//! Event registration domain module.
//!
//! Handles members registering for events and canceling those
//! registrations.
//!
//! # Module Structure
//!
//! - `aggregate` - EventRegistration aggregate entity
//! - `errors` - Registration-specific error types
//! - `status` - RegistrationStatus state machine

mod aggregate;
mod errors;
mod status;

pub use aggregate::EventRegistration;
pub use errors::RegistrationError;
pub use status::RegistrationStatus;
