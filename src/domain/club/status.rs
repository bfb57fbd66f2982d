//! Club approval status state machine.

use crate::domain::foundation::StateMachine;
use serde::{Deserialize, Serialize};

/// Review status of a club listing.
///
/// Clubs are created pending and only appear publicly once an admin
/// approves them. A decided club may be re-reviewed either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClubStatus {
    /// Awaiting admin review. Not publicly listed.
    Pending,

    /// Approved and publicly listed.
    Approved,

    /// Rejected by review. Not publicly listed.
    Rejected,
}

impl ClubStatus {
    /// Returns true if the club appears in public listings.
    pub fn is_public(&self) -> bool {
        matches!(self, ClubStatus::Approved)
    }
}

impl StateMachine for ClubStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use ClubStatus::*;
        matches!(
            (self, target),
            // From PENDING
            (Pending, Approved)
                | (Pending, Rejected)
            // Re-review after a decision
                | (Approved, Rejected)
                | (Rejected, Approved)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use ClubStatus::*;
        match self {
            Pending => vec![Approved, Rejected],
            Approved => vec![Rejected],
            Rejected => vec![Approved],
        }
    }
}
