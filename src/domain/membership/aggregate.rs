//! Membership aggregate entity.
//!
//! The Membership aggregate represents one member's belonging to one club.
//! A member holds at most one live membership per club. Members without a
//! live membership are outsiders to that club.
//!
//! # Design Decisions
//!
//! - **One live membership per pair**: Partial unique constraint on
//!   (club_id, member_email) enforced at database level
//! - **Free clubs skip checkout**: A zero-fee club activates immediately,
//!   a paid club starts in PendingPayment until the payment is confirmed
//! - **Fail-secure**: No membership = no access (joining is never implicit)

use crate::domain::foundation::{
    ClubId, DomainError, EmailAddress, ErrorCode, MembershipId, Timestamp,
};
use serde::{Deserialize, Serialize};

use super::MembershipStatus;

/// Membership aggregate - one member's belonging to one club.
///
/// # Invariants
///
/// - `id` is globally unique
/// - `(club_id, member_email)` is unique among live memberships
/// - Status transitions follow state machine rules
/// - `paid_at` is set exactly when payment confirmed the membership
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Membership {
    /// Unique identifier for this membership.
    pub id: MembershipId,

    /// Club being joined.
    pub club_id: ClubId,

    /// Member who joined. Email is the member's identity key.
    pub member_email: EmailAddress,

    /// Current status in the membership lifecycle.
    pub status: MembershipStatus,

    /// When the member requested to join.
    pub joined_at: Timestamp,

    /// When payment was confirmed. None for free clubs and unpaid joins.
    pub paid_at: Option<Timestamp>,

    /// When the membership was last updated.
    pub updated_at: Timestamp,
}

impl Membership {
    /// Create a new membership in a free club.
    ///
    /// Free-club memberships are immediately Active.
    pub fn create_active(id: MembershipId, club_id: ClubId, member_email: EmailAddress) -> Self {
        let now = Timestamp::now();
        Self {
            id,
            club_id,
            member_email,
            status: MembershipStatus::Active,
            joined_at: now,
            paid_at: None,
            updated_at: now,
        }
    }

    /// Create a new membership in a paid club, awaiting checkout.
    pub fn create_pending_payment(
        id: MembershipId,
        club_id: ClubId,
        member_email: EmailAddress,
    ) -> Self {
        let now = Timestamp::now();
        Self {
            id,
            club_id,
            member_email,
            status: MembershipStatus::PendingPayment,
            joined_at: now,
            paid_at: None,
            updated_at: now,
        }
    }

    /// Check if this membership grants access to the club.
    pub fn grants_access(&self) -> bool {
        self.status.grants_access()
    }

    /// Activate this membership after successful payment.
    ///
    /// # Errors
    ///
    /// Returns error if transition from current status is not allowed.
    pub fn activate(&mut self, paid_at: Timestamp) -> Result<(), DomainError> {
        self.transition_to(MembershipStatus::Active)?;
        self.paid_at = Some(paid_at);
        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// Mark this membership as expired.
    ///
    /// Managers expire memberships from their dashboard. Also applies to
    /// a stale PendingPayment join the manager ends.
    ///
    /// # Errors
    ///
    /// Returns error if transition from current status is not allowed.
    pub fn expire(&mut self) -> Result<(), DomainError> {
        self.transition_to(MembershipStatus::Expired)?;
        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// Cancel this membership.
    ///
    /// # Errors
    ///
    /// Returns error if transition from current status is not allowed.
    pub fn cancel(&mut self) -> Result<(), DomainError> {
        self.transition_to(MembershipStatus::Canceled)?;
        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// Transition to a new status using the state machine.
    fn transition_to(&mut self, target: MembershipStatus) -> Result<(), DomainError> {
        use crate::domain::foundation::StateMachine;

        self.status = self.status.transition_to(target).map_err(|_| {
            DomainError::new(
                ErrorCode::InvalidStateTransition,
                format!(
                    "Cannot transition membership from {:?} to {:?}",
                    self.status, target
                ),
            )
        })?;
        Ok(())
    }
}
