//! HTTP handlers for payment, checkout, and webhook endpoints.

use axum::body::Bytes;
use axum::extract::{Json, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use serde_json::json;

use super::super::error::ApiError;
use super::super::middleware::{require_role, RequireAuth};
use super::super::state::AppState;
use crate::application::{ConfirmPaymentCommand, ProcessWebhookCommand, StartCheckoutCommand};
use crate::domain::foundation::ClubId;
use crate::domain::user::Operation;

use super::dto::{
    CheckoutSessionRequest, CheckoutSessionResponse, ConfirmPaymentRequest,
    ConfirmPaymentResponse, PaymentResponse,
};

const SIGNATURE_HEADER: &str = "Stripe-Signature";

/// POST /api/payments/checkout-session - member: open a hosted checkout.
///
/// The success URL carries the provider's session-id placeholder so the
/// client can confirm the exact session it returned from.
pub async fn start_checkout(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    body: Option<Json<CheckoutSessionRequest>>,
) -> Result<impl IntoResponse, ApiError> {
    let club_id: ClubId = body
        .and_then(|Json(b)| b.club_id)
        .ok_or_else(|| ApiError::bad_request("club_id is required"))?
        .parse()
        .map_err(|_| ApiError::bad_request("Malformed club id"))?;

    let result = state
        .start_checkout_handler()
        .handle(StartCheckoutCommand {
            club_id,
            member_email: user.email,
            success_url: format!(
                "{}/payment/success?session_id={{CHECKOUT_SESSION_ID}}",
                state.client_origin
            ),
            cancel_url: format!("{}/payment/cancelled", state.client_origin),
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CheckoutSessionResponse {
            url: result.session.url,
        }),
    ))
}

/// POST /api/payments/confirm - member: confirm a session after redirect.
pub async fn confirm_payment(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    body: Option<Json<ConfirmPaymentRequest>>,
) -> Result<impl IntoResponse, ApiError> {
    let session_id = body
        .and_then(|Json(b)| b.session_id)
        .ok_or_else(|| ApiError::bad_request("session_id is required"))?;

    let result = state
        .confirm_payment_handler()
        .handle(ConfirmPaymentCommand { session_id })
        .await?;

    Ok(Json(ConfirmPaymentResponse {
        payment: PaymentResponse::from(result.payment),
        membership: result.membership.into(),
    }))
}

/// GET /api/payments - admin: every confirmed payment.
pub async fn list_payments(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> Result<impl IntoResponse, ApiError> {
    require_role(&state, &user, Operation::ListPayments).await?;

    let payments = state.payment_queries().list_all().await?;
    let response: Vec<PaymentResponse> = payments.into_iter().map(PaymentResponse::from).collect();
    Ok(Json(response))
}

/// GET /api/payments/my - member: own payments.
pub async fn list_my_payments(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> Result<impl IntoResponse, ApiError> {
    let payments = state.payment_queries().list_mine(&user.email).await?;
    let response: Vec<PaymentResponse> = payments.into_iter().map(PaymentResponse::from).collect();
    Ok(Json(response))
}

/// POST /api/webhooks/payments - provider: signed payment events.
///
/// Unauthenticated; the HMAC signature over the raw body is the only
/// credential. The response status tells the provider whether to retry:
/// 2xx acknowledges, 4xx drops, 5xx redelivers.
pub async fn payment_webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let signature_header = match headers.get(SIGNATURE_HEADER).and_then(|v| v.to_str().ok()) {
        Some(value) => value.to_string(),
        None => {
            return (
                StatusCode::UNAUTHORIZED,
                Json(json!({
                    "code": "SIGNATURE_MISSING",
                    "message": "Missing signature header",
                })),
            )
                .into_response();
        }
    };

    let outcome = state
        .process_webhook_handler()
        .handle(ProcessWebhookCommand {
            payload: body.to_vec(),
            signature_header,
        })
        .await;

    match outcome {
        Ok(result) => {
            tracing::info!(
                payment_id = %result.payment.id,
                membership_id = %result.membership.id,
                "webhook reconciled payment"
            );
            (StatusCode::OK, Json(json!({ "received": true }))).into_response()
        }
        Err(error) => {
            let status = error.status_code();
            if status == StatusCode::OK {
                tracing::info!(reason = %error, "webhook acknowledged without action");
                (StatusCode::OK, Json(json!({ "received": true }))).into_response()
            } else {
                tracing::warn!(status = %status, reason = %error, "webhook rejected");
                (
                    status,
                    Json(json!({
                        "code": "WEBHOOK_REJECTED",
                        "message": error.to_string(),
                    })),
                )
                    .into_response()
            }
        }
    }
}
