//! In-memory token verifier for tests.
//!
//! Maps literal token strings to identities so router-level tests can
//! authenticate without minting real ID tokens. A forced error turns
//! every verification into the given failure, which exercises the
//! provider-outage paths.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser};
use crate::ports::TokenVerifier;

/// Test double for the `TokenVerifier` port.
#[derive(Debug, Default)]
pub struct MockTokenVerifier {
    tokens: RwLock<HashMap<String, AuthenticatedUser>>,
    forced_error: RwLock<Option<AuthError>>,
}

impl MockTokenVerifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a token that verifies to the given identity.
    pub fn with_user(self, token: impl Into<String>, user: AuthenticatedUser) -> Self {
        self.tokens.write().unwrap().insert(token.into(), user);
        self
    }

    /// Makes every verification fail with `error`, registered tokens
    /// included.
    pub fn with_error(self, error: AuthError) -> Self {
        *self.forced_error.write().unwrap() = Some(error);
        self
    }
}

#[async_trait]
impl TokenVerifier for MockTokenVerifier {
    async fn verify(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        if let Some(error) = self.forced_error.read().unwrap().clone() {
            return Err(error);
        }

        self.tokens
            .read()
            .unwrap()
            .get(token)
            .cloned()
            .ok_or(AuthError::InvalidToken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{EmailAddress, UserId};

    fn identity() -> AuthenticatedUser {
        AuthenticatedUser::new(
            UserId::new("uid-123").unwrap(),
            EmailAddress::new("member@example.com").unwrap(),
            Some("Member".to_string()),
            true,
        )
    }

    #[tokio::test]
    async fn registered_token_verifies() {
        let verifier = MockTokenVerifier::new().with_user("tok-1", identity());

        let user = verifier.verify("tok-1").await.unwrap();
        assert_eq!(user.email.as_str(), "member@example.com");
    }

    #[tokio::test]
    async fn unregistered_token_is_rejected() {
        let verifier = MockTokenVerifier::new();

        let result = verifier.verify("tok-1").await;
        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }

    #[tokio::test]
    async fn forced_error_beats_registered_tokens() {
        let verifier = MockTokenVerifier::new()
            .with_user("tok-1", identity())
            .with_error(AuthError::service_unavailable("jwks down"));

        let result = verifier.verify("tok-1").await;
        assert!(matches!(result, Err(AuthError::ServiceUnavailable(_))));
    }
}
