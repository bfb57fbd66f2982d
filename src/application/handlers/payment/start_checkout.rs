//! StartCheckoutHandler - Command handler for opening a hosted checkout
//! session for a paid club.

use std::sync::Arc;

use crate::domain::club::ClubStatus;
use crate::domain::foundation::{ClubId, DomainError, EmailAddress, ErrorCode, MembershipId};
use crate::domain::membership::{Membership, MembershipStatus};
use crate::ports::{CheckoutProvider, CheckoutSession, ClubRepository, CreateCheckoutRequest, MembershipRepository};

/// Command to open a checkout session.
#[derive(Debug, Clone)]
pub struct StartCheckoutCommand {
    pub club_id: ClubId,
    pub member_email: EmailAddress,
    pub success_url: String,
    pub cancel_url: String,
}

/// Result of opening a checkout session.
#[derive(Debug, Clone)]
pub struct StartCheckoutResult {
    pub session: CheckoutSession,
    pub membership: Membership,
}

/// Handler for opening a hosted checkout session.
///
/// Guarantees a PendingPayment membership exists before the member is
/// redirected, so the later reconciliation always has a row to activate.
/// A member who abandoned an earlier checkout reuses their pending row
/// instead of colliding with it.
pub struct StartCheckoutHandler {
    clubs: Arc<dyn ClubRepository>,
    memberships: Arc<dyn MembershipRepository>,
    provider: Arc<dyn CheckoutProvider>,
}

impl StartCheckoutHandler {
    pub fn new(
        clubs: Arc<dyn ClubRepository>,
        memberships: Arc<dyn MembershipRepository>,
        provider: Arc<dyn CheckoutProvider>,
    ) -> Self {
        Self {
            clubs,
            memberships,
            provider,
        }
    }

    pub async fn handle(&self, cmd: StartCheckoutCommand) -> Result<StartCheckoutResult, DomainError> {
        let club = self
            .clubs
            .find_by_id(&cmd.club_id)
            .await?
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::ClubNotFound,
                    format!("Club not found: {}", cmd.club_id),
                )
            })?;

        if club.is_free() {
            return Err(DomainError::new(
                ErrorCode::ValidationFailed,
                "Free clubs are joined directly, without checkout",
            ));
        }
        if club.status != ClubStatus::Approved {
            return Err(DomainError::new(
                ErrorCode::ValidationFailed,
                "Club is not approved for joining",
            ));
        }

        // Make sure a pending membership exists before redirecting
        let membership = match self
            .memberships
            .find_live(&cmd.club_id, &cmd.member_email)
            .await?
        {
            Some(m) if m.status == MembershipStatus::PendingPayment => m,
            Some(_) => {
                return Err(DomainError::new(
                    ErrorCode::MembershipExists,
                    format!("Already a member of club {}", cmd.club_id),
                ));
            }
            None => {
                let membership = Membership::create_pending_payment(
                    MembershipId::new(),
                    cmd.club_id.clone(),
                    cmd.member_email.clone(),
                );
                self.memberships.insert(&membership).await?;
                membership
            }
        };

        let session = self
            .provider
            .create_checkout_session(CreateCheckoutRequest {
                club_id: cmd.club_id,
                club_name: club.name,
                amount: club.membership_fee,
                member_email: cmd.member_email,
                success_url: cmd.success_url,
                cancel_url: cmd.cancel_url,
            })
            .await?;

        Ok(StartCheckoutResult {
            session,
            membership,
        })
    }
}
