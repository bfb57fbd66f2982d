//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod club;
pub mod event;
pub mod membership;
pub mod payment;
pub mod registration;
pub mod summary;
pub mod user;
