//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, enums, errors)
//! - `user` - Platform users, roles, and the authorization policy
//! - `club` - Club aggregate, review lifecycle, and directory search
//! - `membership` - Join-a-club lifecycle and club access
//! - `event` - Events posted by managers
//! - `registration` - Member registrations for events
//! - `payment` - Immutable records of confirmed payments

pub mod club;
pub mod event;
pub mod foundation;
pub mod membership;
pub mod payment;
pub mod registration;
pub mod user;
