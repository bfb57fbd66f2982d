//! Verified caller identity.
//!
//! The token verifier port yields an `AuthenticatedUser` from whatever
//! identity provider backs the deployment; nothing in here names a
//! provider. The email is typed because memberships, registrations, and
//! payments are all keyed by it.

use super::{EmailAddress, UserId};
use thiserror::Error;

/// Claims extracted from a verified identity token.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    /// Opaque subject identifier from the provider.
    pub id: UserId,

    /// Email the caller is keyed by across the platform.
    pub email: EmailAddress,

    /// `name` claim, when the provider supplies one.
    pub display_name: Option<String>,

    /// Whether the provider has verified the email.
    pub email_verified: bool,
}

impl AuthenticatedUser {
    pub fn new(
        id: UserId,
        email: EmailAddress,
        display_name: Option<String>,
        email_verified: bool,
    ) -> Self {
        Self {
            id,
            email,
            display_name,
            email_verified,
        }
    }
}

/// Token verification failures, phrased provider-neutrally.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// Malformed token, bad signature, or wrong issuer/audience.
    #[error("token rejected")]
    InvalidToken,

    /// Valid token past its expiry. Kept distinct so clients can
    /// refresh instead of re-authenticating.
    #[error("token expired")]
    TokenExpired,

    /// Key material could not be fetched or the provider is down.
    #[error("identity provider unreachable: {0}")]
    ServiceUnavailable(String),
}

impl AuthError {
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::ServiceUnavailable(message.into())
    }
}
