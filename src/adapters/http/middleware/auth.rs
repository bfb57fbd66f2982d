//! Authentication middleware, extractors, and the role guard.
//!
//! - `auth_middleware` - validates Bearer tokens and injects the identity
//!   into request extensions
//! - `RequireAuth` - extractor that requires an authenticated identity
//! - `require_role` - evaluates the policy table against the stored role
//!
//! # Architecture
//!
//! The middleware uses the `TokenVerifier` port, keeping it
//! provider-agnostic: Firebase in production, a mock in tests.
//!
//! ```text
//! Request → auth_middleware → injects AuthenticatedUser into extensions
//!                                      ↓
//!                              Handler → RequireAuth extractor reads it
//!                                      → require_role checks the policy
//! ```
//!
//! Role checks run in the handlers rather than per-route layers because
//! the stored role lives in the database: one lookup per gated request,
//! defaulting to member when the identity has never signed in.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};

use super::super::error::ApiError;
use super::super::state::AppState;
use crate::domain::foundation::AuthenticatedUser;
use crate::domain::user::{authorize, Operation};

/// Authentication middleware that validates Bearer tokens.
///
/// 1. Extracts the Bearer token from the Authorization header
/// 2. Verifies it through the `TokenVerifier` port
/// 3. On success, injects `AuthenticatedUser` into request extensions
/// 4. On missing token, continues without injecting (public routes)
/// 5. On invalid token, responds 401 without running the handler
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let token = request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "));

    match token {
        Some(token) => match state.token_verifier.verify(token).await {
            Ok(user) => {
                request.extensions_mut().insert(user);
                next.run(request).await
            }
            Err(e) => ApiError::from(e).into_response(),
        },
        None => {
            // No token - handlers using RequireAuth will reject with 401.
            next.run(request).await
        }
    }
}

/// Extractor that requires an authenticated identity.
///
/// Returns 401 with code `AUTH_MISSING` when the auth middleware did not
/// inject a verified identity.
#[derive(Debug, Clone)]
pub struct RequireAuth(pub AuthenticatedUser);

impl<S> axum::extract::FromRequestParts<S> for RequireAuth
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut axum::http::request::Parts,
        _state: &'life1 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            parts
                .extensions
                .get::<AuthenticatedUser>()
                .cloned()
                .map(RequireAuth)
                .ok_or_else(ApiError::auth_missing)
        })
    }
}

/// Evaluates the policy table for one operation.
///
/// Looks up the caller's stored role (member when no row exists) and
/// delegates to the domain policy. Returns 403 on mismatch.
pub async fn require_role(
    state: &AppState,
    user: &AuthenticatedUser,
    operation: Operation,
) -> Result<(), ApiError> {
    let role = state.user_queries().role_for_email(&user.email).await?;
    authorize(operation, role)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::adapters::auth::MockTokenVerifier;
    use crate::domain::foundation::{AuthError, EmailAddress, UserId};
    use crate::ports::TokenVerifier;

    fn test_user() -> AuthenticatedUser {
        AuthenticatedUser::new(
            UserId::new("user-123").unwrap(),
            EmailAddress::new("test@example.com").unwrap(),
            Some("Test User".to_string()),
            true,
        )
    }

    // ════════════════════════════════════════════════════════════════════════════
    // TokenVerifier Tests (indirect via MockTokenVerifier)
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn verifier_returns_user_for_valid_token() {
        let verifier: Arc<dyn TokenVerifier> =
            Arc::new(MockTokenVerifier::new().with_user("valid-token", test_user()));

        let result = verifier.verify("valid-token").await;
        assert_eq!(result.unwrap().email.as_str(), "test@example.com");
    }

    #[tokio::test]
    async fn verifier_returns_error_for_invalid_token() {
        let verifier: Arc<dyn TokenVerifier> = Arc::new(MockTokenVerifier::new());

        let result = verifier.verify("invalid-token").await;
        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }

    #[tokio::test]
    async fn verifier_outage_surfaces_as_service_unavailable() {
        let verifier: Arc<dyn TokenVerifier> = Arc::new(
            MockTokenVerifier::new()
                .with_user("valid-token", test_user())
                .with_error(AuthError::service_unavailable("jwks fetch failed")),
        );

        let err: ApiError = verifier.verify("valid-token").await.unwrap_err().into();
        assert_eq!(err.status(), axum::http::StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(err.code(), "AUTH_UNAVAILABLE");
    }

    // ════════════════════════════════════════════════════════════════════════════
    // RequireAuth Extractor Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn require_auth_extracts_user_from_extensions() {
        use axum::extract::FromRequestParts;

        let request = axum::http::Request::builder()
            .uri("/")
            .extension(test_user())
            .body(())
            .unwrap();
        let (mut parts, _) = request.into_parts();

        let result = RequireAuth::from_request_parts(&mut parts, &()).await;
        assert_eq!(result.unwrap().0.email.as_str(), "test@example.com");
    }

    #[tokio::test]
    async fn require_auth_rejects_when_no_user() {
        use axum::extract::FromRequestParts;

        let request = axum::http::Request::builder().uri("/").body(()).unwrap();
        let (mut parts, _) = request.into_parts();

        let result = RequireAuth::from_request_parts(&mut parts, &()).await;
        let rejection = result.unwrap_err();
        assert_eq!(rejection.status(), axum::http::StatusCode::UNAUTHORIZED);
        assert_eq!(rejection.code(), "AUTH_MISSING");
    }
}
