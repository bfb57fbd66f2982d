//! Membership status state machine.
//!
//! Defines all possible membership states and valid transitions
//! according to the join-and-pay lifecycle.

use crate::domain::foundation::StateMachine;
use serde::{Deserialize, Serialize};

/// Membership status.
///
/// Represents the current state of a member's membership in a club
/// from join request through payment to eventual expiry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MembershipStatus {
    /// Initial state when joining a paid club. The membership exists
    /// but grants nothing until checkout completes.
    PendingPayment,

    /// Paid (or free-club) membership in good standing.
    Active,

    /// Ended by the club manager. Terminal.
    Expired,

    /// Abandoned before payment or canceled by the member. Terminal.
    Canceled,
}

impl MembershipStatus {
    /// Returns true if this status grants member access to the club.
    pub fn grants_access(&self) -> bool {
        matches!(self, MembershipStatus::Active)
    }

    /// Returns true if this membership still occupies the member's slot
    /// in the club.
    ///
    /// A live membership blocks the same member from joining the club
    /// again. Both states count:
    /// - Active: the member belongs to the club
    /// - PendingPayment: a join is in flight awaiting checkout
    pub fn is_live(&self) -> bool {
        matches!(
            self,
            MembershipStatus::Active | MembershipStatus::PendingPayment
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MembershipStatus::PendingPayment => "pending_payment",
            MembershipStatus::Active => "active",
            MembershipStatus::Expired => "expired",
            MembershipStatus::Canceled => "canceled",
        }
    }
}

impl StateMachine for MembershipStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use MembershipStatus::*;
        matches!(
            (self, target),
            // From PENDING_PAYMENT
            (PendingPayment, Active)
                | (PendingPayment, Canceled)
                | (PendingPayment, Expired)
            // From ACTIVE
                | (Active, Expired)
                | (Active, Canceled)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use MembershipStatus::*;
        match self {
            PendingPayment => vec![Active, Canceled, Expired],
            Active => vec![Expired, Canceled],
            Expired => vec![],
            Canceled => vec![],
        }
    }
}
