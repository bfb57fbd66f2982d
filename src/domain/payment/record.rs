//! Payment record entity.
//!
//! A payment is written exactly once, after the provider confirms a
//! checkout session. It never changes afterward, so unlike memberships
//! there is no state machine here. Club name and category are copied in
//! at confirmation time so payment history survives club edits and
//! deletions.

use crate::domain::foundation::{
    ClubId, DomainError, EmailAddress, PaymentId, Timestamp, ValidationError,
};
use serde::{Deserialize, Serialize};

/// Immutable record of one confirmed membership payment.
///
/// # Invariants
///
/// - `id` is globally unique
/// - `(club_id, member_email)` is unique (one payment per join)
/// - `transaction_ref` identifies the provider checkout session
/// - `amount > 0` (free clubs never produce payments)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    /// Unique identifier for this payment.
    pub id: PaymentId,

    /// Club the payment was for.
    pub club_id: ClubId,

    /// Member who paid.
    pub member_email: EmailAddress,

    /// Provider-side transaction reference (checkout session id).
    pub transaction_ref: String,

    /// Amount paid in minor currency units.
    pub amount: i64,

    /// Club name at confirmation time.
    pub club_name: String,

    /// Club category at confirmation time.
    pub club_category: String,

    /// When the payment was confirmed.
    pub created_at: Timestamp,
}

impl Payment {
    /// Record a confirmed payment.
    ///
    /// # Errors
    ///
    /// Returns error if `transaction_ref` is empty or `amount` is not
    /// positive.
    pub fn record(
        id: PaymentId,
        club_id: ClubId,
        member_email: EmailAddress,
        transaction_ref: impl Into<String>,
        amount: i64,
        club_name: impl Into<String>,
        club_category: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let transaction_ref = transaction_ref.into();
        if transaction_ref.trim().is_empty() {
            return Err(ValidationError::empty_field("transaction_ref").into());
        }
        if amount <= 0 {
            return Err(ValidationError::out_of_range("amount", 1, i64::MAX, amount).into());
        }

        Ok(Self {
            id,
            club_id,
            member_email,
            transaction_ref,
            amount,
            club_name: club_name.into(),
            club_category: club_category.into(),
            created_at: Timestamp::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member_email() -> EmailAddress {
        EmailAddress::new("member@example.com").unwrap()
    }

    #[test]
    fn record_captures_club_snapshot() {
        let payment = Payment::record(
            PaymentId::new(),
            ClubId::new(),
            member_email(),
            "cs_test_abc123",
            2500,
            "Chess Club",
            "Games",
        )
        .unwrap();

        assert_eq!(payment.amount, 2500);
        assert_eq!(payment.club_name, "Chess Club");
        assert_eq!(payment.club_category, "Games");
    }

    #[test]
    fn record_rejects_empty_transaction_ref() {
        let result = Payment::record(
            PaymentId::new(),
            ClubId::new(),
            member_email(),
            "  ",
            2500,
            "Chess Club",
            "Games",
        );
        assert!(result.is_err());
    }

    #[test]
    fn record_rejects_zero_amount() {
        let result = Payment::record(
            PaymentId::new(),
            ClubId::new(),
            member_email(),
            "cs_test_abc123",
            0,
            "Chess Club",
            "Games",
        );
        assert!(result.is_err());
    }
}
