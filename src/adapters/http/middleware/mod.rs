//! HTTP middleware for axum.
//!
//! - `auth` - Bearer-token middleware, `RequireAuth` extractor, role guard

pub mod auth;

pub use auth::{auth_middleware, require_role, RequireAuth};
