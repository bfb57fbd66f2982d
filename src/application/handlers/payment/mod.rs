//! Payment handlers - checkout, confirmation, webhooks, reads.
//!
//! Both confirmation paths (the member's confirm call and the provider
//! webhook) converge on `ReconcilePaymentHandler`, which is the only
//! code that records payments and activates memberships.

mod confirm_payment;
mod payment_queries;
mod process_webhook;
mod reconcile_payment;
mod start_checkout;

pub use confirm_payment::{ConfirmPaymentCommand, ConfirmPaymentHandler};
pub use payment_queries::PaymentQueries;
pub use process_webhook::{ProcessWebhookCommand, ProcessWebhookHandler};
pub use reconcile_payment::{
    ReconcilePaymentCommand, ReconcilePaymentHandler, ReconcilePaymentResult,
};
pub use start_checkout::{StartCheckoutCommand, StartCheckoutHandler, StartCheckoutResult};
