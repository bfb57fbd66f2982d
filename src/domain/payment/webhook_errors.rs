//! Failure modes for webhook delivery processing.
//!
//! The HTTP status an error maps to drives the provider's redelivery
//! behavior: 2xx acknowledges, 4xx drops the delivery, 5xx redelivers.

use axum::http::StatusCode;
use thiserror::Error;

/// Everything that can go wrong between receiving a delivery and
/// finishing reconciliation.
#[derive(Debug, Error)]
pub enum WebhookError {
    #[error("signature verification failed")]
    InvalidSignature,

    /// Delivery is older than the replay window.
    #[error("signed timestamp outside the replay window")]
    TimestampOutOfRange,

    /// Signed timestamp is ahead of local time beyond tolerated skew.
    #[error("signed timestamp in the future")]
    InvalidTimestamp,

    /// Header or body could not be decoded.
    #[error("malformed delivery: {0}")]
    ParseError(String),

    /// The session metadata lacks a field reconciliation needs.
    #[error("session metadata missing {0}")]
    MissingMetadata(&'static str),

    /// The club named in the session metadata no longer exists.
    #[error("club referenced by session not found")]
    ClubNotFound,

    #[error("membership state rejected activation: {0}")]
    InvalidTransition(String),

    /// The delivery carries nothing to act on. Acknowledged, never an
    /// error toward the provider.
    #[error("delivery ignored: {0}")]
    Ignored(String),

    #[error("storage failure: {0}")]
    Database(String),
}

impl WebhookError {
    /// HTTP status to answer the delivery with.
    pub fn status_code(&self) -> StatusCode {
        use WebhookError::*;
        match self {
            // Failed authentication; the provider must not retry.
            InvalidSignature | TimestampOutOfRange => StatusCode::UNAUTHORIZED,
            // Unusable delivery; a retry would carry the same bytes.
            InvalidTimestamp | ParseError(_) | MissingMetadata(_) => StatusCode::BAD_REQUEST,
            // Acknowledge so the provider stops redelivering.
            Ignored(_) => StatusCode::OK,
            // Transient on our side; a redelivery may succeed.
            ClubNotFound | InvalidTransition(_) | Database(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authentication_failures_answer_401() {
        assert_eq!(
            WebhookError::InvalidSignature.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            WebhookError::TimestampOutOfRange.status_code(),
            StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn unusable_deliveries_answer_400() {
        assert_eq!(
            WebhookError::InvalidTimestamp.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            WebhookError::ParseError("bad json".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            WebhookError::MissingMetadata("club_id").status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn ignored_deliveries_are_acknowledged() {
        let err = WebhookError::Ignored("unrelated event type".to_string());
        assert_eq!(err.status_code(), StatusCode::OK);
    }

    #[test]
    fn transient_failures_invite_redelivery() {
        assert_eq!(
            WebhookError::ClubNotFound.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            WebhookError::Database("pool exhausted".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn display_names_the_missing_metadata_field() {
        let err = WebhookError::MissingMetadata("member_email");
        assert_eq!(format!("{}", err), "session metadata missing member_email");
    }

    #[test]
    fn display_carries_the_ignore_reason() {
        let err = WebhookError::Ignored("payment already recorded".to_string());
        assert_eq!(format!("{}", err), "delivery ignored: payment already recorded");
    }
}
