//! Membership domain module.
//!
//! Handles the join-a-club lifecycle from request through payment to
//! expiry, and the states that gate club access.
//!
//! # Module Structure
//!
//! - `aggregate` - Membership aggregate entity
//! - `errors` - Membership-specific error types
//! - `status` - MembershipStatus state machine

mod aggregate;
mod errors;
mod status;

pub use aggregate::Membership;
pub use errors::MembershipError;
pub use status::MembershipStatus;
