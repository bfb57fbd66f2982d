//! Identity token verification port.
//!
//! The HTTP middleware hands the raw bearer token to this port and gets
//! back a verified caller identity. The production adapter checks
//! Firebase ID tokens; tests substitute an in-memory map.
//!
//! Every implementation must check the token signature plus the issuer,
//! audience, and expiry claims before yielding an identity.

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser};

/// Turns a raw bearer token into a verified [`AuthenticatedUser`].
///
/// # Errors
///
/// - `AuthError::InvalidToken` - malformed token, bad signature, or
///   wrong issuer/audience
/// - `AuthError::TokenExpired` - signature fine, expiry in the past
/// - `AuthError::ServiceUnavailable` - key material unreachable
#[async_trait]
pub trait TokenVerifier: Send + Sync {
    /// `token` is the bare value, already stripped of `Bearer `.
    async fn verify(&self, token: &str) -> Result<AuthenticatedUser, AuthError>;
}
