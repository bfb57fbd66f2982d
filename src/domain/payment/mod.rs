//! Payment domain module.
//!
//! Immutable records of confirmed membership payments, plus webhook
//! verification and event parsing for the payment provider.
//!
//! # Module Structure
//!
//! - `record` - Payment record entity
//! - `provider_event` - Provider webhook event types
//! - `webhook_errors` - Webhook processing errors
//! - `webhook_verifier` - HMAC-SHA256 signature verification

mod provider_event;
mod record;
mod webhook_errors;
mod webhook_verifier;

pub use provider_event::{
    CheckoutSessionObject, ProviderEvent, ProviderEventType, SessionMetadata,
};
pub use record::Payment;
pub use webhook_errors::WebhookError;
pub use webhook_verifier::PaymentWebhookVerifier;

#[cfg(test)]
pub use webhook_verifier::compute_test_signature;
