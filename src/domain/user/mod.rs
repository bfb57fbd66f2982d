//! User module - identities, roles, and the authorization policy.
//!
//! # Domain Invariants
//!
//! 1. One stored user per email, created on first sign-in
//! 2. New users are always members; only an admin changes roles
//! 3. Identities with no stored row act as members
//! 4. The policy table is the single source of role requirements

mod entity;
mod policy;
mod role;

pub use entity::User;
pub use policy::{authorize, Operation};
pub use role::Role;
