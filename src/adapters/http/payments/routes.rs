//! Axum routers for payment endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::super::state::AppState;
use super::handlers::{
    confirm_payment, list_my_payments, list_payments, payment_webhook, start_checkout,
};

/// Payment API routes, mounted at `/api/payments`.
///
/// - `POST /checkout-session` - member: open a hosted checkout
/// - `POST /confirm` - member: confirm a session after redirect
/// - `GET /` - admin: all payments
/// - `GET /my` - member: own payments
pub fn payment_routes() -> Router<AppState> {
    Router::new()
        .route("/checkout-session", post(start_checkout))
        .route("/confirm", post(confirm_payment))
        .route("/", get(list_payments))
        .route("/my", get(list_my_payments))
}

/// Webhook routes, mounted at `/api/webhooks`. No bearer auth; the
/// provider signature is verified instead.
pub fn webhook_routes() -> Router<AppState> {
    Router::new().route("/payments", post(payment_webhook))
}
