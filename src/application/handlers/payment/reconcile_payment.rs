//! ReconcilePaymentHandler - the single place a confirmed checkout turns
//! into stored state.
//!
//! Both confirmation paths land here: the member's explicit confirm call
//! after redirect, and the provider's webhook. The handler records the
//! payment and activates the matching pending membership.

use std::sync::Arc;

use crate::domain::club::Club;
use crate::domain::foundation::{
    ClubId, DomainError, EmailAddress, ErrorCode, PaymentId, Timestamp,
};
use crate::domain::membership::{Membership, MembershipStatus};
use crate::domain::payment::Payment;
use crate::ports::{ClubRepository, MembershipRepository, PaymentRepository};

/// Command carrying one settled checkout to reconcile.
#[derive(Debug, Clone)]
pub struct ReconcilePaymentCommand {
    /// Provider-side transaction reference (checkout session id).
    pub transaction_ref: String,
    /// Club the payment was for, from session metadata.
    pub club_id: ClubId,
    /// Member who paid, from session metadata.
    pub member_email: EmailAddress,
    /// Amount the provider reports; falls back to the club fee.
    pub amount: Option<i64>,
}

/// Result of a successful reconciliation.
#[derive(Debug, Clone)]
pub struct ReconcilePaymentResult {
    pub payment: Payment,
    pub membership: Membership,
}

/// Handler reconciling a settled checkout against stored state.
///
/// The payment insert hits the unique (club, member) index, so a checkout
/// that was already reconciled fails with `PaymentExists` before any
/// membership is touched. A settled payment with no pending membership to
/// activate is an operator problem, reported as `ReconciliationFailed`
/// and logged; the payment row stays so state can be repaired.
pub struct ReconcilePaymentHandler {
    clubs: Arc<dyn ClubRepository>,
    payments: Arc<dyn PaymentRepository>,
    memberships: Arc<dyn MembershipRepository>,
}

impl ReconcilePaymentHandler {
    pub fn new(
        clubs: Arc<dyn ClubRepository>,
        payments: Arc<dyn PaymentRepository>,
        memberships: Arc<dyn MembershipRepository>,
    ) -> Self {
        Self {
            clubs,
            payments,
            memberships,
        }
    }

    pub async fn handle(
        &self,
        cmd: ReconcilePaymentCommand,
    ) -> Result<ReconcilePaymentResult, DomainError> {
        // 1. The club must still exist; its name and category get snapshotted
        let club = self.lookup_club(&cmd.club_id).await?;

        let amount = cmd.amount.unwrap_or(club.membership_fee);
        let payment = Payment::record(
            PaymentId::new(),
            cmd.club_id.clone(),
            cmd.member_email.clone(),
            cmd.transaction_ref,
            amount,
            club.name.clone(),
            club.category.clone(),
        )?;

        // 2. Record the payment; the unique index rejects a second
        //    reconciliation of the same (club, member) pair
        self.payments.insert(&payment).await?;

        // 3. Activate the pending membership the checkout was started for
        let membership = self
            .memberships
            .find_live(&cmd.club_id, &cmd.member_email)
            .await?;

        let mut membership = match membership {
            Some(m) if m.status == MembershipStatus::PendingPayment => m,
            other => {
                tracing::error!(
                    club_id = %cmd.club_id,
                    member_email = %cmd.member_email,
                    transaction_ref = %payment.transaction_ref,
                    found_status = ?other.map(|m| m.status),
                    "settled payment has no pending membership to activate"
                );
                return Err(DomainError::new(
                    ErrorCode::ReconciliationFailed,
                    "No pending membership matches this payment",
                ));
            }
        };

        membership.activate(Timestamp::now())?;
        self.memberships.update(&membership).await?;

        Ok(ReconcilePaymentResult {
            payment,
            membership,
        })
    }

    async fn lookup_club(&self, club_id: &ClubId) -> Result<Club, DomainError> {
        self.clubs.find_by_id(club_id).await?.ok_or_else(|| {
            DomainError::new(
                ErrorCode::ClubNotFound,
                format!("Club not found: {}", club_id),
            )
        })
    }
}
