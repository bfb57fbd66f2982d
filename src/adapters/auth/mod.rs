//! Authentication adapters.
//!
//! Implementations of the `TokenVerifier` port:
//!
//! - `firebase` - Production Firebase ID token verification
//! - `mock` - Test implementation that doesn't require external services

mod firebase;
mod mock;

pub use firebase::{FirebaseConfig, FirebaseTokenVerifier};
pub use mock::MockTokenVerifier;
