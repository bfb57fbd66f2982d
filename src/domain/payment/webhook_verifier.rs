//! Webhook signature verification for payment provider deliveries.
//!
//! The provider signs each delivery with HMAC-SHA256 over
//! `<timestamp>.<raw body>` and sends the result in a header shaped
//! `t=<unix-secs>,v1=<hex>`. Verification is pure (no IO), so it lives
//! with the payment domain rather than in the HTTP adapter.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use super::provider_event::ProviderEvent;
use super::webhook_errors::WebhookError;

/// Deliveries older than this are treated as replays.
const MAX_AGE_SECS: i64 = 300;

/// Tolerated clock skew for timestamps ahead of local time.
const MAX_FUTURE_SKEW_SECS: i64 = 60;

/// Verifies provider webhook signatures and decodes the signed event.
#[derive(Clone)]
pub struct PaymentWebhookVerifier {
    secret: String,
}

impl PaymentWebhookVerifier {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Checks the signature header against the raw body, then decodes
    /// the body into a [`ProviderEvent`].
    ///
    /// The timestamp must fall inside the replay window before the
    /// signature is compared; both checks pass before any JSON is
    /// touched, so an unauthenticated body is never parsed.
    ///
    /// # Errors
    ///
    /// - `ParseError` when the header is malformed or the body is not
    ///   valid event JSON
    /// - `TimestampOutOfRange` when the delivery is older than the
    ///   replay window
    /// - `InvalidTimestamp` when the timestamp is too far in the future
    /// - `InvalidSignature` when the HMAC does not match
    pub fn verify_and_parse(
        &self,
        payload: &[u8],
        signature_header: &str,
    ) -> Result<ProviderEvent, WebhookError> {
        let timestamp = self.signed_timestamp(signature_header)?;
        let claimed = claimed_signature(signature_header)?;

        let expected = self.signature_for(timestamp, payload);
        if !bool::from(claimed.ct_eq(&expected)) {
            return Err(WebhookError::InvalidSignature);
        }

        serde_json::from_slice(payload).map_err(|e| WebhookError::ParseError(e.to_string()))
    }

    /// Extracts the `t` field and enforces the replay window.
    fn signed_timestamp(&self, header: &str) -> Result<i64, WebhookError> {
        let timestamp: i64 = header_field(header, "t")
            .ok_or_else(|| WebhookError::ParseError("signature header missing t".to_string()))?
            .parse()
            .map_err(|_| WebhookError::ParseError("signature timestamp not numeric".to_string()))?;

        let age = chrono::Utc::now().timestamp() - timestamp;
        if age > MAX_AGE_SECS {
            return Err(WebhookError::TimestampOutOfRange);
        }
        if age < -MAX_FUTURE_SKEW_SECS {
            return Err(WebhookError::InvalidTimestamp);
        }
        Ok(timestamp)
    }

    /// HMAC-SHA256 over `<timestamp>.<payload>` with the endpoint secret.
    fn signature_for(&self, timestamp: i64, payload: &[u8]) -> Vec<u8> {
        let mut mac =
            Hmac::<Sha256>::new_from_slice(self.secret.as_bytes()).expect("HMAC accepts any key");
        mac.update(timestamp.to_string().as_bytes());
        mac.update(b".");
        mac.update(payload);
        mac.finalize().into_bytes().to_vec()
    }
}

impl std::fmt::Debug for PaymentWebhookVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaymentWebhookVerifier").finish_non_exhaustive()
    }
}

/// Looks up one `key=value` field in the comma-separated header.
/// Unknown fields are skipped for forward compatibility.
fn header_field<'a>(header: &'a str, key: &str) -> Option<&'a str> {
    header.split(',').find_map(|part| {
        let (k, v) = part.trim().split_once('=')?;
        (k == key).then_some(v)
    })
}

/// Decodes the `v1` field from hex into raw signature bytes.
fn claimed_signature(header: &str) -> Result<Vec<u8>, WebhookError> {
    let hex_value = header_field(header, "v1")
        .ok_or_else(|| WebhookError::ParseError("signature header missing v1".to_string()))?;
    hex::decode(hex_value)
        .map_err(|_| WebhookError::ParseError("v1 signature is not valid hex".to_string()))
}

/// Signs a payload the way the provider would, for test fixtures.
#[cfg(test)]
pub fn compute_test_signature(secret: &str, timestamp: i64, payload: &str) -> String {
    let mut mac =
        Hmac::<Sha256>::new_from_slice(secret.as_bytes()).expect("HMAC accepts any key");
    mac.update(format!("{}.{}", timestamp, payload).as_bytes());
    hex::encode(mac.finalize().into_bytes())
}
