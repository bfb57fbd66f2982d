//! ConfirmPaymentHandler - Command handler for the member's explicit
//! payment confirmation after the checkout redirect.

use std::str::FromStr;
use std::sync::Arc;

use crate::domain::foundation::{ClubId, DomainError, EmailAddress, ErrorCode};
use crate::ports::CheckoutProvider;

use super::reconcile_payment::{
    ReconcilePaymentCommand, ReconcilePaymentHandler, ReconcilePaymentResult,
};

/// Command to confirm a checkout session the member was redirected from.
#[derive(Debug, Clone)]
pub struct ConfirmPaymentCommand {
    pub session_id: String,
}

/// Handler confirming a checkout session against the provider.
///
/// Retrieves the session server-side rather than trusting anything in the
/// redirect, then hands the settled checkout to the reconciler. The webhook
/// path runs the same reconciler, so whichever arrives first wins and the
/// other sees `PaymentExists`.
pub struct ConfirmPaymentHandler {
    provider: Arc<dyn CheckoutProvider>,
    reconciler: Arc<ReconcilePaymentHandler>,
}

impl ConfirmPaymentHandler {
    pub fn new(provider: Arc<dyn CheckoutProvider>, reconciler: Arc<ReconcilePaymentHandler>) -> Self {
        Self {
            provider,
            reconciler,
        }
    }

    pub async fn handle(
        &self,
        cmd: ConfirmPaymentCommand,
    ) -> Result<ReconcilePaymentResult, DomainError> {
        // 1. Ask the provider what actually happened to the session
        let session = self.provider.retrieve_session(&cmd.session_id).await?;

        if !session.is_paid() {
            return Err(DomainError::new(
                ErrorCode::PaymentFailed,
                format!("Checkout session {} is not paid", session.id),
            ));
        }

        // 2. The session metadata names the club and member being paid for
        let club_id = session.club_id.as_deref().ok_or_else(|| {
            DomainError::new(
                ErrorCode::ValidationFailed,
                "Checkout session is missing club_id metadata",
            )
        })?;
        let club_id = ClubId::from_str(club_id).map_err(|_| {
            DomainError::new(
                ErrorCode::ValidationFailed,
                "Checkout session carries a malformed club_id",
            )
        })?;

        let member_email = session.member_email.as_deref().ok_or_else(|| {
            DomainError::new(
                ErrorCode::ValidationFailed,
                "Checkout session is missing member_email metadata",
            )
        })?;
        let member_email = EmailAddress::new(member_email)?;

        // 3. Record the payment and activate the membership
        self.reconciler
            .handle(ReconcilePaymentCommand {
                transaction_ref: session.id,
                club_id,
                member_email,
                amount: session.amount_total,
            })
            .await
    }
}
