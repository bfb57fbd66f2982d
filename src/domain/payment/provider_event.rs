//! Payment provider webhook event types.
//!
//! Defines the structures for parsing provider webhook payloads.
//! Only fields relevant to our processing are captured.

use serde::{Deserialize, Serialize};

use super::WebhookError;

/// Provider webhook event (simplified).
///
/// Contains the essential fields needed for webhook processing.
/// Additional fields from the provider's full event schema are ignored.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProviderEvent {
    /// Unique identifier for the event (evt_xxx format).
    pub id: String,

    /// Type of event (e.g., "checkout.session.completed").
    #[serde(rename = "type")]
    pub event_type: String,

    /// Time at which the event was created (Unix timestamp).
    pub created: i64,

    /// Object containing event-specific data.
    pub data: ProviderEventData,

    /// Whether this is a live mode event (vs test mode).
    pub livemode: bool,
}

/// Container for event-specific data.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProviderEventData {
    /// The object that triggered the event (polymorphic based on event type).
    pub object: serde_json::Value,
}

/// Known provider event types that we handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderEventType {
    /// Checkout session completed successfully.
    CheckoutSessionCompleted,
    /// Unknown or unhandled event type.
    Unknown,
}

impl ProviderEventType {
    /// Parse event type from string.
    pub fn from_str(s: &str) -> Self {
        match s {
            "checkout.session.completed" => Self::CheckoutSessionCompleted,
            _ => Self::Unknown,
        }
    }

    /// Convert to the provider's event type string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CheckoutSessionCompleted => "checkout.session.completed",
            Self::Unknown => "unknown",
        }
    }
}

impl ProviderEvent {
    /// Parse the event type into a known enum variant.
    pub fn parsed_type(&self) -> ProviderEventType {
        ProviderEventType::from_str(&self.event_type)
    }

    /// Extract the completed checkout session from this event.
    ///
    /// # Errors
    ///
    /// - `Ignored` if the event type is not checkout.session.completed
    /// - `ParseError` if the data object does not look like a session
    pub fn completed_checkout(&self) -> Result<CheckoutSessionObject, WebhookError> {
        if self.parsed_type() != ProviderEventType::CheckoutSessionCompleted {
            return Err(WebhookError::Ignored(format!(
                "unhandled event type: {}",
                self.event_type
            )));
        }
        serde_json::from_value(self.data.object.clone())
            .map_err(|e| WebhookError::ParseError(e.to_string()))
    }
}

/// Checkout session object embedded in checkout events.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CheckoutSessionObject {
    /// Session identifier (cs_xxx format).
    pub id: String,

    /// Total amount in minor currency units.
    pub amount_total: Option<i64>,

    /// Payment state reported by the provider ("paid" when settled).
    pub payment_status: Option<String>,

    /// Email the session was created for.
    pub customer_email: Option<String>,

    /// Metadata attached when the session was created.
    #[serde(default)]
    pub metadata: SessionMetadata,
}

/// Metadata we attach to every checkout session at creation time.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SessionMetadata {
    /// Club being paid for.
    pub club_id: Option<String>,

    /// Member paying.
    pub member_email: Option<String>,
}

impl CheckoutSessionObject {
    /// Club id metadata, or the error naming the missing field.
    pub fn club_id(&self) -> Result<&str, WebhookError> {
        self.metadata
            .club_id
            .as_deref()
            .ok_or(WebhookError::MissingMetadata("club_id"))
    }

    /// Member email metadata, or the error naming the missing field.
    pub fn member_email(&self) -> Result<&str, WebhookError> {
        self.metadata
            .member_email
            .as_deref()
            .ok_or(WebhookError::MissingMetadata("member_email"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn completed_event(object: serde_json::Value) -> ProviderEvent {
        serde_json::from_value(json!({
            "id": "evt_test_123",
            "type": "checkout.session.completed",
            "created": chrono::Utc::now().timestamp(),
            "data": { "object": object },
            "livemode": false
        }))
        .unwrap()
    }

    #[test]
    fn parses_checkout_session_completed() {
        let event = completed_event(json!({
            "id": "cs_test_abc",
            "amount_total": 2500,
            "payment_status": "paid",
            "customer_email": "member@example.com",
            "metadata": {
                "club_id": "6a0f0cde-9f4d-4bca-a021-5ab34a1a1f53",
                "member_email": "member@example.com"
            }
        }));

        assert_eq!(event.parsed_type(), ProviderEventType::CheckoutSessionCompleted);

        let session = event.completed_checkout().unwrap();
        assert_eq!(session.id, "cs_test_abc");
        assert_eq!(session.amount_total, Some(2500));
        assert_eq!(session.club_id().unwrap(), "6a0f0cde-9f4d-4bca-a021-5ab34a1a1f53");
        assert_eq!(session.member_email().unwrap(), "member@example.com");
    }

    #[test]
    fn unknown_event_type_is_ignored() {
        let event: ProviderEvent = serde_json::from_value(json!({
            "id": "evt_test_456",
            "type": "invoice.payment_succeeded",
            "created": chrono::Utc::now().timestamp(),
            "data": { "object": {} },
            "livemode": false
        }))
        .unwrap();

        assert_eq!(event.parsed_type(), ProviderEventType::Unknown);

        let result = event.completed_checkout();
        assert!(matches!(result, Err(WebhookError::Ignored(_))));
    }

    #[test]
    fn missing_metadata_reports_field_name() {
        let event = completed_event(json!({
            "id": "cs_test_abc",
            "amount_total": 2500,
            "metadata": {}
        }));

        let session = event.completed_checkout().unwrap();
        assert!(matches!(
            session.club_id(),
            Err(WebhookError::MissingMetadata("club_id"))
        ));
        assert!(matches!(
            session.member_email(),
            Err(WebhookError::MissingMetadata("member_email"))
        ));
    }

    #[test]
    fn absent_metadata_object_defaults_to_empty() {
        let event = completed_event(json!({
            "id": "cs_test_abc"
        }));

        let session = event.completed_checkout().unwrap();
        assert!(session.metadata.club_id.is_none());
        assert!(session.amount_total.is_none());
    }

    #[test]
    fn event_type_round_trips_through_strings() {
        assert_eq!(
            ProviderEventType::from_str("checkout.session.completed"),
            ProviderEventType::CheckoutSessionCompleted
        );
        assert_eq!(
            ProviderEventType::CheckoutSessionCompleted.as_str(),
            "checkout.session.completed"
        );
        assert_eq!(
            ProviderEventType::from_str("something.else"),
            ProviderEventType::Unknown
        );
    }
}
