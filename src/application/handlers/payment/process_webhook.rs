//! ProcessWebhookHandler - Command handler for provider payment webhooks.

use std::str::FromStr;
use std::sync::Arc;

use crate::domain::foundation::{ClubId, EmailAddress, ErrorCode};
use crate::domain::payment::{PaymentWebhookVerifier, WebhookError};

use super::reconcile_payment::{
    ReconcilePaymentCommand, ReconcilePaymentHandler, ReconcilePaymentResult,
};

/// Command carrying one raw webhook delivery.
#[derive(Debug, Clone)]
pub struct ProcessWebhookCommand {
    /// Raw request body, exactly as signed by the provider.
    pub payload: Vec<u8>,
    /// Contents of the provider signature header.
    pub signature_header: String,
}

/// Handler for provider webhook deliveries.
///
/// Verifies the signature over the raw body before parsing anything, then
/// feeds settled checkouts through the same reconciler as the member's
/// confirm call. A checkout the confirm path already reconciled comes back
/// as `PaymentExists`, which the webhook acknowledges as ignored so the
/// provider stops retrying.
pub struct ProcessWebhookHandler {
    verifier: PaymentWebhookVerifier,
    reconciler: Arc<ReconcilePaymentHandler>,
}

impl ProcessWebhookHandler {
    pub fn new(verifier: PaymentWebhookVerifier, reconciler: Arc<ReconcilePaymentHandler>) -> Self {
        Self {
            verifier,
            reconciler,
        }
    }

    pub async fn handle(
        &self,
        cmd: ProcessWebhookCommand,
    ) -> Result<ReconcilePaymentResult, WebhookError> {
        // 1. Verify the signature before trusting any of the payload
        let event = self
            .verifier
            .verify_and_parse(&cmd.payload, &cmd.signature_header)?;

        // 2. Only settled checkout completions move state
        let session = event.completed_checkout()?;
        let settled = session.payment_status.as_deref() == Some("paid");
        if !settled {
            return Err(WebhookError::Ignored(format!(
                "checkout session {} is not settled",
                session.id
            )));
        }

        let club_id = ClubId::from_str(session.club_id()?)
            .map_err(|_| WebhookError::ParseError("malformed club_id metadata".to_string()))?;
        let member_email = EmailAddress::new(session.member_email()?)
            .map_err(|_| WebhookError::ParseError("malformed member_email metadata".to_string()))?;

        // 3. Reconcile exactly like the confirm path
        tracing::info!(
            event_id = %event.id,
            session_id = %session.id,
            club_id = %club_id,
            "processing settled checkout webhook"
        );

        self.reconciler
            .handle(ReconcilePaymentCommand {
                transaction_ref: session.id,
                club_id,
                member_email,
                amount: session.amount_total,
            })
            .await
            .map_err(|err| match err.code {
                // Redelivery of an already-reconciled checkout
                ErrorCode::PaymentExists => {
                    WebhookError::Ignored("payment already recorded".to_string())
                }
                ErrorCode::ClubNotFound => WebhookError::ClubNotFound,
                ErrorCode::InvalidStateTransition | ErrorCode::ReconciliationFailed => {
                    WebhookError::InvalidTransition(err.message)
                }
                ErrorCode::ValidationFailed
                | ErrorCode::EmptyField
                | ErrorCode::OutOfRange
                | ErrorCode::InvalidFormat => WebhookError::ParseError(err.message),
                _ => WebhookError::Database(err.message),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::club::{Club, ClubSearch};
    use crate::domain::foundation::{DomainError, MembershipId};
    use crate::domain::membership::{Membership, MembershipStatus};
    use crate::domain::payment::{compute_test_signature, Payment};
    use crate::ports::{ClubRepository, MembershipRepository, MembershipWithClub, PaymentRepository};
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Mutex;

    const TEST_SECRET: &str = "whsec_test_secret_12345";

    // ════════════════════════════════════════════════════════════════════════════
    // Mock Implementations
    // ════════════════════════════════════════════════════════════════════════════

    struct MockClubRepository {
        clubs: Mutex<Vec<Club>>,
    }

    impl MockClubRepository {
        fn with_club(club: Club) -> Self {
            Self {
                clubs: Mutex::new(vec![club]),
            }
        }

        fn empty() -> Self {
            Self {
                clubs: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl ClubRepository for MockClubRepository {
        async fn insert(&self, _club: &Club) -> Result<(), DomainError> {
            Ok(())
        }

        async fn update(&self, _club: &Club) -> Result<(), DomainError> {
            Ok(())
        }

        async fn delete(&self, _id: &ClubId) -> Result<(), DomainError> {
            Ok(())
        }

        async fn find_by_id(&self, id: &ClubId) -> Result<Option<Club>, DomainError> {
            Ok(self
                .clubs
                .lock()
                .unwrap()
                .iter()
                .find(|c| &c.id == id)
                .cloned())
        }

        async fn list_all(&self) -> Result<Vec<Club>, DomainError> {
            Ok(vec![])
        }

        async fn list_approved(&self, _limit: Option<i64>) -> Result<Vec<Club>, DomainError> {
            Ok(vec![])
        }

        async fn list_by_manager(
            &self,
            _manager_email: &EmailAddress,
        ) -> Result<Vec<Club>, DomainError> {
            Ok(vec![])
        }

        async fn search(&self, _query: &ClubSearch) -> Result<Vec<Club>, DomainError> {
            Ok(vec![])
        }
    }

    struct MockPaymentRepository {
        inserted: Mutex<Vec<Payment>>,
        conflict: bool,
    }

    impl MockPaymentRepository {
        fn new() -> Self {
            Self {
                inserted: Mutex::new(Vec::new()),
                conflict: false,
            }
        }

        fn conflicting() -> Self {
            Self {
                inserted: Mutex::new(Vec::new()),
                conflict: true,
            }
        }

        fn inserted(&self) -> Vec<Payment> {
            self.inserted.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl PaymentRepository for MockPaymentRepository {
        async fn insert(&self, payment: &Payment) -> Result<(), DomainError> {
            if self.conflict {
                return Err(DomainError::new(
                    ErrorCode::PaymentExists,
                    "Payment already recorded",
                ));
            }
            self.inserted.lock().unwrap().push(payment.clone());
            Ok(())
        }

        async fn find_by_club_and_member(
            &self,
            _club_id: &ClubId,
            _member_email: &EmailAddress,
        ) -> Result<Option<Payment>, DomainError> {
            Ok(None)
        }

        async fn list_all(&self) -> Result<Vec<Payment>, DomainError> {
            Ok(vec![])
        }

        async fn list_by_member(
            &self,
            _member_email: &EmailAddress,
        ) -> Result<Vec<Payment>, DomainError> {
            Ok(vec![])
        }
    }

    struct MockMembershipRepository {
        live: Mutex<Vec<Membership>>,
        updated: Mutex<Vec<Membership>>,
    }

    impl MockMembershipRepository {
        fn with_live(membership: Membership) -> Self {
            Self {
                live: Mutex::new(vec![membership]),
                updated: Mutex::new(Vec::new()),
            }
        }

        fn updated(&self) -> Vec<Membership> {
            self.updated.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl MembershipRepository for MockMembershipRepository {
        async fn insert(&self, _membership: &Membership) -> Result<(), DomainError> {
            Ok(())
        }

        async fn update(&self, membership: &Membership) -> Result<(), DomainError> {
            self.updated.lock().unwrap().push(membership.clone());
            Ok(())
        }

        async fn find_by_id(
            &self,
            _id: &MembershipId,
        ) -> Result<Option<Membership>, DomainError> {
            Ok(None)
        }

        async fn find_live(
            &self,
            club_id: &ClubId,
            member_email: &EmailAddress,
        ) -> Result<Option<Membership>, DomainError> {
            Ok(self
                .live
                .lock()
                .unwrap()
                .iter()
                .find(|m| &m.club_id == club_id && &m.member_email == member_email)
                .cloned())
        }

        async fn list_by_member(
            &self,
            _member_email: &EmailAddress,
        ) -> Result<Vec<MembershipWithClub>, DomainError> {
            Ok(vec![])
        }

        async fn list_by_manager(
            &self,
            _manager_email: &EmailAddress,
        ) -> Result<Vec<MembershipWithClub>, DomainError> {
            Ok(vec![])
        }
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Test Helpers
    // ════════════════════════════════════════════════════════════════════════════

    fn member_email() -> EmailAddress {
        EmailAddress::new("member@example.com").unwrap()
    }

    fn paid_club() -> Club {
        let mut club = Club::create(
            ClubId::new(),
            "Photography Circle",
            "Monthly photo walks",
            "Arts",
            "Downtown Studio",
            3000,
            None,
            EmailAddress::new("manager@example.com").unwrap(),
        )
        .unwrap();
        club.approve().unwrap();
        club
    }

    fn completed_payload(club_id: &ClubId, payment_status: &str) -> String {
        json!({
            "id": "evt_test_789",
            "type": "checkout.session.completed",
            "created": chrono::Utc::now().timestamp(),
            "data": {
                "object": {
                    "id": "cs_test_hook",
                    "amount_total": 3000,
                    "payment_status": payment_status,
                    "customer_email": "member@example.com",
                    "metadata": {
                        "club_id": club_id.to_string(),
                        "member_email": "member@example.com"
                    }
                }
            },
            "livemode": false
        })
        .to_string()
    }

    fn signed_command(payload: String) -> ProcessWebhookCommand {
        let timestamp = chrono::Utc::now().timestamp();
        let signature = compute_test_signature(TEST_SECRET, timestamp, &payload);
        ProcessWebhookCommand {
            payload: payload.into_bytes(),
            signature_header: format!("t={},v1={}", timestamp, signature),
        }
    }

    fn handler_for(
        clubs: MockClubRepository,
        payments: Arc<MockPaymentRepository>,
        memberships: Arc<MockMembershipRepository>,
    ) -> ProcessWebhookHandler {
        let reconciler = Arc::new(ReconcilePaymentHandler::new(
            Arc::new(clubs),
            payments,
            memberships,
        ));
        ProcessWebhookHandler::new(PaymentWebhookVerifier::new(TEST_SECRET), reconciler)
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Success Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn settled_checkout_activates_membership() {
        let club = paid_club();
        let pending = Membership::create_pending_payment(
            MembershipId::new(),
            club.id.clone(),
            member_email(),
        );
        let payments = Arc::new(MockPaymentRepository::new());
        let memberships = Arc::new(MockMembershipRepository::with_live(pending));

        let handler = handler_for(
            MockClubRepository::with_club(club.clone()),
            payments.clone(),
            memberships.clone(),
        );
        let result = handler
            .handle(signed_command(completed_payload(&club.id, "paid")))
            .await
            .unwrap();

        assert_eq!(result.membership.status, MembershipStatus::Active);
        assert_eq!(result.payment.transaction_ref, "cs_test_hook");
        assert_eq!(payments.inserted().len(), 1);
        assert_eq!(memberships.updated().len(), 1);
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Failure Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn bad_signature_is_rejected_before_parsing() {
        let club = paid_club();
        let payments = Arc::new(MockPaymentRepository::new());
        let memberships = Arc::new(MockMembershipRepository::with_live(
            Membership::create_pending_payment(MembershipId::new(), club.id.clone(), member_email()),
        ));

        let handler = handler_for(
            MockClubRepository::with_club(club.clone()),
            payments.clone(),
            memberships,
        );
        let payload = completed_payload(&club.id, "paid");
        let timestamp = chrono::Utc::now().timestamp();
        let result = handler
            .handle(ProcessWebhookCommand {
                payload: payload.into_bytes(),
                signature_header: format!("t={},v1={}", timestamp, "a".repeat(64)),
            })
            .await;

        assert!(matches!(result, Err(WebhookError::InvalidSignature)));
        assert!(payments.inserted().is_empty());
    }

    #[tokio::test]
    async fn unhandled_event_type_is_ignored() {
        let club = paid_club();
        let payments = Arc::new(MockPaymentRepository::new());
        let memberships = Arc::new(MockMembershipRepository::with_live(
            Membership::create_pending_payment(MembershipId::new(), club.id.clone(), member_email()),
        ));

        let handler = handler_for(
            MockClubRepository::with_club(club),
            payments.clone(),
            memberships,
        );
        let payload = json!({
            "id": "evt_other",
            "type": "invoice.payment_succeeded",
            "created": chrono::Utc::now().timestamp(),
            "data": { "object": {} },
            "livemode": false
        })
        .to_string();
        let result = handler.handle(signed_command(payload)).await;

        assert!(matches!(result, Err(WebhookError::Ignored(_))));
        assert!(payments.inserted().is_empty());
    }

    #[tokio::test]
    async fn unsettled_checkout_is_ignored() {
        let club = paid_club();
        let payments = Arc::new(MockPaymentRepository::new());
        let memberships = Arc::new(MockMembershipRepository::with_live(
            Membership::create_pending_payment(MembershipId::new(), club.id.clone(), member_email()),
        ));

        let handler = handler_for(
            MockClubRepository::with_club(club.clone()),
            payments.clone(),
            memberships,
        );
        let result = handler
            .handle(signed_command(completed_payload(&club.id, "unpaid")))
            .await;

        assert!(matches!(result, Err(WebhookError::Ignored(_))));
        assert!(payments.inserted().is_empty());
    }

    #[tokio::test]
    async fn redelivered_checkout_is_acknowledged_as_ignored() {
        let club = paid_club();
        let payments = Arc::new(MockPaymentRepository::conflicting());
        let memberships = Arc::new(MockMembershipRepository::with_live(
            Membership::create_pending_payment(MembershipId::new(), club.id.clone(), member_email()),
        ));

        let handler = handler_for(
            MockClubRepository::with_club(club.clone()),
            payments,
            memberships.clone(),
        );
        let result = handler
            .handle(signed_command(completed_payload(&club.id, "paid")))
            .await;

        match result {
            Err(err @ WebhookError::Ignored(_)) => {
                assert_eq!(err.status_code(), axum::http::StatusCode::OK);
            }
            other => panic!("expected Ignored, got {:?}", other.map(|r| r.membership.status)),
        }
        assert!(memberships.updated().is_empty());
    }

    #[tokio::test]
    async fn deleted_club_answers_with_server_error() {
        let club = paid_club();
        let payments = Arc::new(MockPaymentRepository::new());
        let memberships = Arc::new(MockMembershipRepository::with_live(
            Membership::create_pending_payment(MembershipId::new(), club.id.clone(), member_email()),
        ));

        let handler = handler_for(MockClubRepository::empty(), payments, memberships);
        let result = handler
            .handle(signed_command(completed_payload(&club.id, "paid")))
            .await;

        match result {
            Err(err @ WebhookError::ClubNotFound) => {
                assert_eq!(err.status_code(), axum::http::StatusCode::INTERNAL_SERVER_ERROR)
            }
            other => panic!("expected ClubNotFound, got {:?}", other.map(|r| r.membership.status)),
        }
    }

    #[tokio::test]
    async fn missing_metadata_is_a_bad_request() {
        let club = paid_club();
        let payments = Arc::new(MockPaymentRepository::new());
        let memberships = Arc::new(MockMembershipRepository::with_live(
            Membership::create_pending_payment(MembershipId::new(), club.id.clone(), member_email()),
        ));

        let handler = handler_for(
            MockClubRepository::with_club(club),
            payments.clone(),
            memberships,
        );
        let payload = json!({
            "id": "evt_test_790",
            "type": "checkout.session.completed",
            "created": chrono::Utc::now().timestamp(),
            "data": {
                "object": {
                    "id": "cs_test_hook",
                    "amount_total": 3000,
                    "payment_status": "paid",
                    "metadata": {}
                }
            },
            "livemode": false
        })
        .to_string();
        let result = handler.handle(signed_command(payload)).await;

        assert!(matches!(
            result,
            Err(WebhookError::MissingMetadata("club_id"))
        ));
        assert!(payments.inserted().is_empty());
    }
}
