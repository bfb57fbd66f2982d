//! Query handlers for payment reads.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, EmailAddress};
use crate::domain::payment::Payment;
use crate::ports::PaymentRepository;

/// Read-side handler for payment records.
pub struct PaymentQueries {
    payments: Arc<dyn PaymentRepository>,
}

impl PaymentQueries {
    pub fn new(payments: Arc<dyn PaymentRepository>) -> Self {
        Self { payments }
    }

    /// Every recorded payment, newest first.
    pub async fn list_all(&self) -> Result<Vec<Payment>, DomainError> {
        self.payments.list_all().await
    }

    /// The member's own payments, newest first.
    pub async fn list_mine(
        &self,
        member_email: &EmailAddress,
    ) -> Result<Vec<Payment>, DomainError> {
        self.payments.list_by_member(member_email).await
    }
}
