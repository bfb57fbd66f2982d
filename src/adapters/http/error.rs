//! API error type shared by every HTTP handler.
//!
//! Converts domain errors into `{ "code": ..., "message": ... }` JSON
//! responses. Internal error text (database, provider) is logged and
//! replaced with a generic message so it never reaches the client.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::domain::foundation::{AuthError, DomainError, ErrorCode};
use crate::domain::membership::MembershipError;
use crate::domain::registration::RegistrationError;

/// JSON body for every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

/// Error type returned by HTTP handlers.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    code: String,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status,
            code: code.into(),
            message: message.into(),
        }
    }

    /// 401 with a stable code for a missing Authorization header.
    pub fn auth_missing() -> Self {
        Self::new(
            StatusCode::UNAUTHORIZED,
            "AUTH_MISSING",
            "Authentication is required",
        )
    }

    /// 400 for a malformed request field.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "VALIDATION_FAILED", message)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn code(&self) -> &str {
        &self.code
    }
}

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::ValidationFailed
        | ErrorCode::EmptyField
        | ErrorCode::OutOfRange
        | ErrorCode::InvalidFormat => StatusCode::BAD_REQUEST,

        ErrorCode::NotFound
        | ErrorCode::UserNotFound
        | ErrorCode::ClubNotFound
        | ErrorCode::MembershipNotFound
        | ErrorCode::EventNotFound
        | ErrorCode::RegistrationNotFound => StatusCode::NOT_FOUND,

        // An unpaid checkout session is a conflict with the confirm
        // request, not a 402; the client retries confirmation later.
        ErrorCode::Conflict
        | ErrorCode::MembershipExists
        | ErrorCode::RegistrationExists
        | ErrorCode::PaymentExists
        | ErrorCode::InvalidStateTransition
        | ErrorCode::PaymentFailed => StatusCode::CONFLICT,

        ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorCode::Forbidden => StatusCode::FORBIDDEN,

        ErrorCode::ReconciliationFailed
        | ErrorCode::DatabaseError
        | ErrorCode::ExternalServiceError
        | ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        let status = status_for(err.code);

        // 500-class messages stay in the logs, not in the response.
        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(code = %err.code, error = %err.message, "Internal error");
            "Internal server error".to_string()
        } else {
            err.message
        };

        Self {
            status,
            code: err.code.to_string(),
            message,
        }
    }
}

impl From<MembershipError> for ApiError {
    fn from(err: MembershipError) -> Self {
        DomainError::from(err).into()
    }
}

impl From<RegistrationError> for ApiError {
    fn from(err: RegistrationError) -> Self {
        DomainError::from(err).into()
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::TokenExpired => Self::new(
                StatusCode::UNAUTHORIZED,
                "TOKEN_EXPIRED",
                "Token expired",
            ),
            AuthError::ServiceUnavailable(msg) => {
                tracing::error!(error = %msg, "Auth service unavailable");
                Self::new(
                    StatusCode::SERVICE_UNAVAILABLE,
                    "AUTH_UNAVAILABLE",
                    "Authentication service unavailable",
                )
            }
            _ => Self::new(
                StatusCode::UNAUTHORIZED,
                "AUTH_INVALID",
                "Invalid authentication token",
            ),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            code: self.code,
            message: self.message,
        };
        (self.status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ════════════════════════════════════════════════════════════════════════════
    // Status Mapping Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[test]
    fn validation_errors_map_to_400() {
        for code in [
            ErrorCode::ValidationFailed,
            ErrorCode::EmptyField,
            ErrorCode::OutOfRange,
            ErrorCode::InvalidFormat,
        ] {
            assert_eq!(status_for(code), StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn not_found_errors_map_to_404() {
        for code in [
            ErrorCode::NotFound,
            ErrorCode::ClubNotFound,
            ErrorCode::EventNotFound,
        ] {
            assert_eq!(status_for(code), StatusCode::NOT_FOUND);
        }
    }

    #[test]
    fn conflict_errors_map_to_409() {
        for code in [
            ErrorCode::MembershipExists,
            ErrorCode::RegistrationExists,
            ErrorCode::PaymentExists,
            ErrorCode::InvalidStateTransition,
            ErrorCode::PaymentFailed,
        ] {
            assert_eq!(status_for(code), StatusCode::CONFLICT);
        }
    }

    #[test]
    fn internal_errors_hide_message() {
        let err: ApiError =
            DomainError::new(ErrorCode::DatabaseError, "connection refused to db-host:5432").into();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.code(), "DATABASE_ERROR");
        assert_eq!(err.message, "Internal server error");
    }

    #[test]
    fn client_errors_keep_message() {
        let err: ApiError =
            DomainError::new(ErrorCode::ClubNotFound, "Club not found").into();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.message, "Club not found");
    }

    #[test]
    fn expired_token_maps_to_401_with_distinct_code() {
        let err: ApiError = AuthError::TokenExpired.into();
        assert_eq!(err.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(err.code(), "TOKEN_EXPIRED");
    }

    #[test]
    fn auth_outage_maps_to_503() {
        let err: ApiError = AuthError::service_unavailable("jwks fetch failed").into();
        assert_eq!(err.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
