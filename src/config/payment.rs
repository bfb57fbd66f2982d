//! Payment configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Payment configuration (Stripe-hosted checkout)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaymentConfig {
    /// Provider secret key
    pub secret_key: String,

    /// Webhook signing secret. Optional; without it the webhook
    /// endpoint rejects every delivery.
    pub webhook_secret: Option<String>,
}

impl PaymentConfig {
    /// Check if using provider test mode
    pub fn is_test_mode(&self) -> bool {
        self.secret_key.starts_with("sk_test_")
    }

    /// Validate payment configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.secret_key.is_empty() {
            return Err(ValidationError::MissingRequired("PAYMENT__SECRET_KEY"));
        }
        if !self.secret_key.starts_with("sk_") {
            return Err(ValidationError::InvalidPaymentKey);
        }
        if let Some(secret) = &self.webhook_secret {
            if !secret.starts_with("whsec_") {
                return Err(ValidationError::InvalidWebhookSecret);
            }
        }
        Ok(())
    }
}
