//! HTTP DTOs for payment and checkout endpoints.

use serde::{Deserialize, Serialize};

use super::super::memberships::MembershipResponse;
use crate::domain::payment::Payment;

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to open a hosted checkout session for a paid club.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CheckoutSessionRequest {
    #[serde(default)]
    pub club_id: Option<String>,
}

/// Request to confirm a checkout session after the redirect back.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfirmPaymentRequest {
    #[serde(default)]
    pub session_id: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// The hosted checkout URL the client redirects the member to.
#[derive(Debug, Clone, Serialize)]
pub struct CheckoutSessionResponse {
    pub url: String,
}

/// A confirmed payment as returned by the API.
#[derive(Debug, Clone, Serialize)]
pub struct PaymentResponse {
    pub id: String,
    pub club_id: String,
    pub member_email: String,
    pub transaction_ref: String,
    pub amount: i64,
    pub club_name: String,
    pub club_category: String,
    pub created_at: String,
}

impl From<Payment> for PaymentResponse {
    fn from(p: Payment) -> Self {
        Self {
            id: p.id.to_string(),
            club_id: p.club_id.to_string(),
            member_email: p.member_email.to_string(),
            transaction_ref: p.transaction_ref,
            amount: p.amount,
            club_name: p.club_name,
            club_category: p.club_category,
            created_at: p.created_at.as_datetime().to_rfc3339(),
        }
    }
}

/// Payment plus the membership it activated.
#[derive(Debug, Clone, Serialize)]
pub struct ConfirmPaymentResponse {
    pub payment: PaymentResponse,
    pub membership: MembershipResponse,
}
