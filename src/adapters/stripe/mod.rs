//! Stripe checkout adapters.
//!
//! - `stripe_checkout` - Production implementation of the `CheckoutProvider` port
//! - `mock_checkout` - Configurable in-memory provider for tests

mod mock_checkout;
mod stripe_checkout;

pub use mock_checkout::{CheckoutRequestSnapshot, MockCheckoutProvider};
pub use stripe_checkout::{StripeCheckoutAdapter, StripeCheckoutConfig};
