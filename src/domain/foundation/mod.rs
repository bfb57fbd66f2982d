//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, error types, and traits
//! that form the vocabulary of the ClubSphere domain.

mod auth;
mod errors;
mod ids;
mod ownership;
mod state_machine;
mod timestamp;

pub use auth::{AuthError, AuthenticatedUser};
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{
    ClubId, EmailAddress, EventId, MembershipId, PaymentId, RegistrationId, UserId, UserRecordId,
};
pub use ownership::OwnedByEmail;
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
