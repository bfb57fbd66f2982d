//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `auth` - Firebase token verification
//! - `http` - REST API surface
//! - `postgres` - Repository implementations over sqlx
//! - `stripe` - Hosted checkout provider

pub mod auth;
pub mod http;
pub mod postgres;
pub mod stripe;
