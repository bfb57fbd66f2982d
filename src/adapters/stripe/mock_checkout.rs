//! Mock checkout provider for testing.
//!
//! Configurable in-memory implementation of `CheckoutProvider` for unit
//! and integration tests. Supports pre-seeded sessions, error injection,
//! and call tracking.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::ports::{
    CheckoutError, CheckoutProvider, CheckoutSession, CreateCheckoutRequest, RetrievedSession,
};

/// Mock checkout provider for testing.
///
/// # Example
///
/// ```ignore
/// let mock = MockCheckoutProvider::new();
///
/// // Seed a session the test will retrieve later
/// mock.seed_paid_session("cs_test_1", "club-uuid", "member@example.com", 2500);
///
/// // Or make every call fail
/// let failing = MockCheckoutProvider::failing(CheckoutError::network("offline"));
/// ```
#[derive(Default)]
pub struct MockCheckoutProvider {
    inner: Arc<Mutex<MockState>>,
}

#[derive(Default)]
struct MockState {
    /// Retrievable sessions by ID.
    sessions: HashMap<String, RetrievedSession>,

    /// Requests passed to `create_checkout_session`, in order.
    created: Vec<CreateCheckoutRequest>,

    /// Error returned by every call when set.
    error: Option<CheckoutError>,

    /// Counter used to mint session IDs.
    next_session_number: u64,
}

impl MockCheckoutProvider {
    /// Create a new mock with no sessions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock where every call returns the given error.
    pub fn failing(error: CheckoutError) -> Self {
        let mock = Self::new();
        mock.inner.lock().unwrap().error = Some(error);
        mock
    }

    /// Seed a session that `retrieve_session` will return.
    pub fn seed_session(&self, session: RetrievedSession) {
        self.inner
            .lock()
            .unwrap()
            .sessions
            .insert(session.id.clone(), session);
    }

    /// Seed a settled session with metadata, as reconciliation expects.
    pub fn seed_paid_session(
        &self,
        session_id: impl Into<String>,
        club_id: impl Into<String>,
        member_email: impl Into<String>,
        amount: i64,
    ) {
        let member_email = member_email.into();
        self.seed_session(RetrievedSession {
            id: session_id.into(),
            payment_status: "paid".to_string(),
            amount_total: Some(amount),
            customer_email: Some(member_email.clone()),
            club_id: Some(club_id.into()),
            member_email: Some(member_email),
        });
    }

    /// Requests passed to `create_checkout_session`, in call order.
    pub fn created_requests(&self) -> Vec<CheckoutRequestSnapshot> {
        self.inner
            .lock()
            .unwrap()
            .created
            .iter()
            .map(|r| CheckoutRequestSnapshot {
                club_id: r.club_id.to_string(),
                member_email: r.member_email.to_string(),
                amount: r.amount,
            })
            .collect()
    }

    /// Number of sessions created so far.
    pub fn created_count(&self) -> usize {
        self.inner.lock().unwrap().created.len()
    }
}

/// Snapshot of a create request for test assertions.
#[derive(Debug, Clone)]
pub struct CheckoutRequestSnapshot {
    pub club_id: String,
    pub member_email: String,
    pub amount: i64,
}

#[async_trait]
impl CheckoutProvider for MockCheckoutProvider {
    async fn create_checkout_session(
        &self,
        request: CreateCheckoutRequest,
    ) -> Result<CheckoutSession, CheckoutError> {
        let mut state = self.inner.lock().unwrap();

        if let Some(error) = state.error.clone() {
            return Err(error);
        }

        state.next_session_number += 1;
        let session_id = format!("cs_mock_{}", state.next_session_number);

        // Register the session as retrievable but unpaid, mirroring a
        // member who has not completed checkout yet.
        state.sessions.insert(
            session_id.clone(),
            RetrievedSession {
                id: session_id.clone(),
                payment_status: "unpaid".to_string(),
                amount_total: Some(request.amount),
                customer_email: Some(request.member_email.to_string()),
                club_id: Some(request.club_id.to_string()),
                member_email: Some(request.member_email.to_string()),
            },
        );

        state.created.push(request);

        Ok(CheckoutSession {
            id: session_id.clone(),
            url: format!("https://checkout.test/pay/{}", session_id),
            expires_at: chrono::Utc::now().timestamp() + 24 * 60 * 60,
        })
    }

    async fn retrieve_session(
        &self,
        session_id: &str,
    ) -> Result<RetrievedSession, CheckoutError> {
        let state = self.inner.lock().unwrap();

        if let Some(error) = state.error.clone() {
            return Err(error);
        }

        state
            .sessions
            .get(session_id)
            .cloned()
            .ok_or_else(|| CheckoutError::session_not_found(session_id))
    }
}
