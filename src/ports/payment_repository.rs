//! Payment repository port.
//!
//! Defines the contract for persisting and querying Payment records.
//!
//! # Design
//!
//! - **Insert-once**: payments are immutable; there is no update method
//! - **Storage-enforced idempotency**: `insert` relies on a unique index
//!   on (club_id, member_email); recording the same join twice must
//!   surface as `PaymentExists`, which callers treat as already-processed

use crate::domain::foundation::{ClubId, DomainError, EmailAddress};
use crate::domain::payment::Payment;
use async_trait::async_trait;

/// Repository port for Payment record persistence.
#[async_trait]
pub trait PaymentRepository: Send + Sync {
    /// Record a confirmed payment.
    ///
    /// # Errors
    ///
    /// - `PaymentExists` if a payment for this (club, member) pair was
    ///   already recorded
    /// - `DatabaseError` on persistence failure
    async fn insert(&self, payment: &Payment) -> Result<(), DomainError>;

    /// Find the payment for a (club, member) pair.
    ///
    /// Returns `None` when no payment was recorded.
    async fn find_by_club_and_member(
        &self,
        club_id: &ClubId,
        member_email: &EmailAddress,
    ) -> Result<Option<Payment>, DomainError>;

    /// List every payment on the platform, newest first.
    async fn list_all(&self) -> Result<Vec<Payment>, DomainError>;

    /// List the member's payments, newest first.
    async fn list_by_member(
        &self,
        member_email: &EmailAddress,
    ) -> Result<Vec<Payment>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trait object safety test
    #[test]
    fn payment_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn PaymentRepository) {}
    }
}
