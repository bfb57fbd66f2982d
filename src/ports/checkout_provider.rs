//! Checkout provider port for external payment processing.
//!
//! Defines the contract for hosted-checkout integrations (e.g., Stripe).
//! Implementations create checkout sessions for club fees and retrieve
//! them during reconciliation.
//!
//! # Design
//!
//! - **Gateway agnostic**: interface works with any hosted-checkout provider
//! - **One-shot payments**: club fees are single charges, not subscriptions
//! - **Metadata round trip**: club id and member email travel inside the
//!   session so reconciliation needs nothing but the session reference

use crate::domain::foundation::{ClubId, DomainError, EmailAddress};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Port for hosted-checkout provider integrations.
#[async_trait]
pub trait CheckoutProvider: Send + Sync {
    /// Create a checkout session for a club's membership fee.
    ///
    /// Returns a URL for the member to complete payment.
    async fn create_checkout_session(
        &self,
        request: CreateCheckoutRequest,
    ) -> Result<CheckoutSession, CheckoutError>;

    /// Retrieve a checkout session by its provider ID.
    ///
    /// Used during reconciliation to confirm the session is paid and to
    /// read back the metadata attached at creation.
    async fn retrieve_session(&self, session_id: &str)
        -> Result<RetrievedSession, CheckoutError>;
}

/// Request to create a checkout session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCheckoutRequest {
    /// Club being paid for (stored as session metadata).
    pub club_id: ClubId,

    /// Club name shown on the provider's checkout page.
    pub club_name: String,

    /// Fee amount in minor currency units.
    pub amount: i64,

    /// Member email for checkout pre-fill and session metadata.
    pub member_email: EmailAddress,

    /// URL to redirect after successful checkout.
    pub success_url: String,

    /// URL to redirect after canceled checkout.
    pub cancel_url: String,
}

/// Newly created checkout session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutSession {
    /// Provider's session ID (cs_xxx format).
    pub id: String,

    /// URL for the member to complete checkout.
    pub url: String,

    /// When the session expires (Unix timestamp).
    pub expires_at: i64,
}

/// Checkout session as retrieved during reconciliation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievedSession {
    /// Provider's session ID.
    pub id: String,

    /// Payment state reported by the provider ("paid" when settled).
    pub payment_status: String,

    /// Total amount in minor currency units.
    pub amount_total: Option<i64>,

    /// Email the session was created for.
    pub customer_email: Option<String>,

    /// Club id attached at creation time.
    pub club_id: Option<String>,

    /// Member email attached at creation time.
    pub member_email: Option<String>,
}

impl RetrievedSession {
    /// True when the provider reports the session as settled.
    pub fn is_paid(&self) -> bool {
        self.payment_status == "paid"
    }
}

/// Errors from checkout provider operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutError {
    /// Error code for categorization.
    pub code: CheckoutErrorCode,

    /// Human-readable message.
    pub message: String,

    /// Provider's error code (if available).
    pub provider_code: Option<String>,

    /// Whether the operation can be retried.
    pub retryable: bool,
}

impl CheckoutError {
    /// Create a new checkout error.
    pub fn new(code: CheckoutErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            provider_code: None,
            retryable: code.is_retryable(),
        }
    }

    /// Create with provider code.
    pub fn with_provider_code(mut self, code: impl Into<String>) -> Self {
        self.provider_code = Some(code.into());
        self
    }

    /// Create a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::new(CheckoutErrorCode::NetworkError, message)
    }

    /// Create an authentication error.
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::new(CheckoutErrorCode::AuthenticationError, message)
    }

    /// Create a session-not-found error.
    pub fn session_not_found(session_id: &str) -> Self {
        Self::new(
            CheckoutErrorCode::SessionNotFound,
            format!("Checkout session not found: {}", session_id),
        )
    }

    /// Create an invalid-request error.
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(CheckoutErrorCode::InvalidRequest, message)
    }

    /// Create a provider error.
    pub fn provider(message: impl Into<String>) -> Self {
        Self::new(CheckoutErrorCode::ProviderError, message)
    }
}

impl std::fmt::Display for CheckoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for CheckoutError {}

impl From<CheckoutError> for DomainError {
    fn from(err: CheckoutError) -> Self {
        use crate::domain::foundation::ErrorCode;

        let code = match err.code {
            CheckoutErrorCode::SessionNotFound => ErrorCode::NotFound,
            CheckoutErrorCode::InvalidRequest => ErrorCode::ValidationFailed,
            CheckoutErrorCode::PaymentIncomplete => ErrorCode::PaymentFailed,
            _ => ErrorCode::ExternalServiceError,
        };

        DomainError::new(code, err.message)
    }
}

/// Checkout error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutErrorCode {
    /// Network connectivity issue.
    NetworkError,

    /// API authentication failed.
    AuthenticationError,

    /// Checkout session not found.
    SessionNotFound,

    /// Request rejected by the provider.
    InvalidRequest,

    /// Session exists but is not paid.
    PaymentIncomplete,

    /// Rate limit exceeded.
    RateLimitExceeded,

    /// Provider API error.
    ProviderError,

    /// Unknown error.
    Unknown,
}

impl CheckoutErrorCode {
    /// Check if this error type is typically retryable.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            CheckoutErrorCode::NetworkError | CheckoutErrorCode::RateLimitExceeded
        )
    }
}

impl std::fmt::Display for CheckoutErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            CheckoutErrorCode::NetworkError => "network_error",
            CheckoutErrorCode::AuthenticationError => "authentication_error",
            CheckoutErrorCode::SessionNotFound => "session_not_found",
            CheckoutErrorCode::InvalidRequest => "invalid_request",
            CheckoutErrorCode::PaymentIncomplete => "payment_incomplete",
            CheckoutErrorCode::RateLimitExceeded => "rate_limit_exceeded",
            CheckoutErrorCode::ProviderError => "provider_error",
            CheckoutErrorCode::Unknown => "unknown",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trait object safety test
    #[test]
    fn checkout_provider_is_object_safe() {
        fn _accepts_dyn(_provider: &dyn CheckoutProvider) {}
    }

    #[test]
    fn retrieved_session_paid_check() {
        let paid = RetrievedSession {
            id: "cs_1".to_string(),
            payment_status: "paid".to_string(),
            amount_total: Some(2500),
            customer_email: None,
            club_id: None,
            member_email: None,
        };
        assert!(paid.is_paid());

        let unpaid = RetrievedSession {
            payment_status: "unpaid".to_string(),
            ..paid
        };
        assert!(!unpaid.is_paid());
    }

    #[test]
    fn checkout_error_retryable() {
        assert!(CheckoutErrorCode::NetworkError.is_retryable());
        assert!(CheckoutErrorCode::RateLimitExceeded.is_retryable());

        assert!(!CheckoutErrorCode::SessionNotFound.is_retryable());
        assert!(!CheckoutErrorCode::InvalidRequest.is_retryable());
    }

    #[test]
    fn checkout_error_display() {
        let err = CheckoutError::session_not_found("cs_missing");
        assert!(err.to_string().contains("session_not_found"));
        assert!(err.to_string().contains("cs_missing"));
    }

    #[test]
    fn checkout_error_converts_to_domain_error() {
        use crate::domain::foundation::ErrorCode;

        let err = CheckoutError::session_not_found("cs_gone");
        let domain_err: DomainError = err.into();
        assert_eq!(domain_err.code, ErrorCode::NotFound);

        let err = CheckoutError::network("connection reset");
        let domain_err: DomainError = err.into();
        assert_eq!(domain_err.code, ErrorCode::ExternalServiceError);
    }
}
