//! Stripe hosted-checkout adapter.
//!
//! Implements the `CheckoutProvider` port against the Stripe Checkout
//! Sessions API. Club fees are one-shot payments, so sessions are created
//! in `payment` mode with an inline price rather than a catalog price ID.
//!
//! Webhook signature verification lives in the domain layer
//! (`PaymentWebhookVerifier`); this adapter only talks to the REST API.
//!
//! # Configuration
//!
//! ```ignore
//! let config = StripeCheckoutConfig::new(api_key);
//! let adapter = StripeCheckoutAdapter::new(config);
//! ```

use std::collections::HashMap;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::ports::{
    CheckoutError, CheckoutProvider, CheckoutSession, CreateCheckoutRequest, RetrievedSession,
};

/// Default lifetime of a checkout session (24 hours, Stripe's default).
const SESSION_LIFETIME_SECS: i64 = 24 * 60 * 60;

/// Stripe Checkout API configuration.
#[derive(Clone)]
pub struct StripeCheckoutConfig {
    /// Stripe secret API key (sk_live_... or sk_test_...).
    api_key: SecretString,

    /// Base URL for the Stripe API (default: https://api.stripe.com).
    api_base_url: String,

    /// ISO currency code for club fees (default: usd).
    currency: String,
}

impl StripeCheckoutConfig {
    /// Create a new checkout configuration.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::new(api_key.into()),
            api_base_url: "https://api.stripe.com".to_string(),
            currency: "usd".to_string(),
        }
    }

    /// Set a custom API base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    /// Set the currency used for club fees.
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }
}

impl std::fmt::Debug for StripeCheckoutConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StripeCheckoutConfig")
            .field("api_base_url", &self.api_base_url)
            .field("currency", &self.currency)
            .finish_non_exhaustive()
    }
}

/// Checkout session as returned by the Stripe API.
#[derive(Debug, Deserialize)]
struct StripeSession {
    id: String,
    url: Option<String>,
    expires_at: Option<i64>,
    payment_status: Option<String>,
    amount_total: Option<i64>,
    customer_email: Option<String>,
    #[serde(default)]
    metadata: HashMap<String, String>,
}

/// Stripe implementation of the `CheckoutProvider` port.
pub struct StripeCheckoutAdapter {
    config: StripeCheckoutConfig,
    http_client: reqwest::Client,
}

impl StripeCheckoutAdapter {
    /// Create a new adapter with the given configuration.
    pub fn new(config: StripeCheckoutConfig) -> Self {
        Self {
            config,
            http_client: reqwest::Client::new(),
        }
    }

    /// Map a non-success Stripe response to a `CheckoutError`.
    async fn error_from_response(
        &self,
        operation: &str,
        response: reqwest::Response,
    ) -> CheckoutError {
        let status = response.status();
        let error_text = response.text().await.unwrap_or_default();
        tracing::error!(
            operation = operation,
            status = %status,
            error = %error_text,
            "Stripe API request failed"
        );

        match status {
            reqwest::StatusCode::UNAUTHORIZED => {
                CheckoutError::authentication("Stripe rejected the API key")
            }
            reqwest::StatusCode::BAD_REQUEST => CheckoutError::invalid_request(format!(
                "Stripe rejected the request: {}",
                error_text
            )),
            reqwest::StatusCode::TOO_MANY_REQUESTS => CheckoutError::new(
                crate::ports::CheckoutErrorCode::RateLimitExceeded,
                "Stripe rate limit exceeded",
            ),
            _ => CheckoutError::provider(format!("Stripe API error: {}", error_text)),
        }
        .with_provider_code(status.as_u16().to_string())
    }
}

#[async_trait]
impl CheckoutProvider for StripeCheckoutAdapter {
    async fn create_checkout_session(
        &self,
        request: CreateCheckoutRequest,
    ) -> Result<CheckoutSession, CheckoutError> {
        let url = format!("{}/v1/checkout/sessions", self.config.api_base_url);

        let params = vec![
            ("mode", "payment".to_string()),
            ("customer_email", request.member_email.to_string()),
            (
                "line_items[0][price_data][currency]",
                self.config.currency.clone(),
            ),
            (
                "line_items[0][price_data][product_data][name]",
                format!("{} membership", request.club_name),
            ),
            (
                "line_items[0][price_data][unit_amount]",
                request.amount.to_string(),
            ),
            ("line_items[0][quantity]", "1".to_string()),
            ("success_url", request.success_url),
            ("cancel_url", request.cancel_url),
            ("metadata[club_id]", request.club_id.to_string()),
            ("metadata[member_email]", request.member_email.to_string()),
        ];

        let response = self
            .http_client
            .post(&url)
            .basic_auth(self.config.api_key.expose_secret(), Option::<&str>::None)
            .form(&params)
            .send()
            .await
            .map_err(|e| CheckoutError::network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(self
                .error_from_response("create_checkout_session", response)
                .await);
        }

        let session: StripeSession = response.json().await.map_err(|e| {
            CheckoutError::provider(format!("Failed to parse Stripe response: {}", e))
        })?;

        let checkout_url = session.url.ok_or_else(|| {
            CheckoutError::provider("Stripe session response did not include a checkout URL")
        })?;

        let expires_at = session
            .expires_at
            .unwrap_or_else(|| chrono::Utc::now().timestamp() + SESSION_LIFETIME_SECS);

        tracing::info!(session_id = %session.id, "Checkout session created");

        Ok(CheckoutSession {
            id: session.id,
            url: checkout_url,
            expires_at,
        })
    }

    async fn retrieve_session(
        &self,
        session_id: &str,
    ) -> Result<RetrievedSession, CheckoutError> {
        let url = format!(
            "{}/v1/checkout/sessions/{}",
            self.config.api_base_url, session_id
        );

        let response = self
            .http_client
            .get(&url)
            .basic_auth(self.config.api_key.expose_secret(), Option::<&str>::None)
            .send()
            .await
            .map_err(|e| CheckoutError::network(e.to_string()))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(CheckoutError::session_not_found(session_id));
        }

        if !response.status().is_success() {
            return Err(self.error_from_response("retrieve_session", response).await);
        }

        let mut session: StripeSession = response.json().await.map_err(|e| {
            CheckoutError::provider(format!("Failed to parse Stripe response: {}", e))
        })?;

        Ok(RetrievedSession {
            id: session.id,
            payment_status: session.payment_status.unwrap_or_else(|| "unpaid".to_string()),
            amount_total: session.amount_total,
            customer_email: session.customer_email,
            club_id: session.metadata.remove("club_id"),
            member_email: session.metadata.remove("member_email"),
        })
    }
}
