//! Shared application state for the HTTP layer.
//!
//! Holds Arc-wrapped port implementations and constructs application
//! handlers on demand, so route handlers never see concrete adapters.

use std::sync::Arc;

use crate::application::{
    CancelRegistrationHandler, ClubQueries, ConfirmPaymentHandler, CreateClubHandler,
    CreateEventHandler, DeleteClubHandler, DeleteEventHandler, EventQueries,
    ExpireMembershipHandler, JoinClubHandler, MembershipQueries, PaymentQueries,
    ProcessWebhookHandler, ReconcilePaymentHandler, RegisterForEventHandler, RegistrationQueries,
    ReviewClubHandler, SetUserRoleHandler, SignInHandler, StartCheckoutHandler, SummaryQueries,
    UpdateClubHandler, UpdateEventHandler, UserQueries,
};
use crate::domain::payment::PaymentWebhookVerifier;
use crate::ports::{
    CheckoutProvider, ClubRepository, EventRepository, MembershipRepository, PaymentRepository,
    RegistrationRepository, SummaryReader, TokenVerifier, UserRepository,
};

/// Shared state cloned into every request.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub clubs: Arc<dyn ClubRepository>,
    pub memberships: Arc<dyn MembershipRepository>,
    pub events: Arc<dyn EventRepository>,
    pub registrations: Arc<dyn RegistrationRepository>,
    pub payments: Arc<dyn PaymentRepository>,
    pub summaries: Arc<dyn SummaryReader>,
    pub token_verifier: Arc<dyn TokenVerifier>,
    pub checkout_provider: Arc<dyn CheckoutProvider>,
    pub webhook_verifier: PaymentWebhookVerifier,

    /// Origin the client app is served from; checkout redirects land here.
    pub client_origin: String,
}

impl AppState {
    // ════════════════════════════════════════════════════════════════════════════
    // Users
    // ════════════════════════════════════════════════════════════════════════════

    pub fn sign_in_handler(&self) -> SignInHandler {
        SignInHandler::new(self.users.clone())
    }

    pub fn set_user_role_handler(&self) -> SetUserRoleHandler {
        SetUserRoleHandler::new(self.users.clone())
    }

    pub fn user_queries(&self) -> UserQueries {
        UserQueries::new(self.users.clone())
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Clubs
    // ════════════════════════════════════════════════════════════════════════════

    pub fn create_club_handler(&self) -> CreateClubHandler {
        CreateClubHandler::new(self.clubs.clone())
    }

    pub fn update_club_handler(&self) -> UpdateClubHandler {
        UpdateClubHandler::new(self.clubs.clone())
    }

    pub fn review_club_handler(&self) -> ReviewClubHandler {
        ReviewClubHandler::new(self.clubs.clone())
    }

    pub fn delete_club_handler(&self) -> DeleteClubHandler {
        DeleteClubHandler::new(self.clubs.clone())
    }

    pub fn club_queries(&self) -> ClubQueries {
        ClubQueries::new(self.clubs.clone())
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Memberships
    // ════════════════════════════════════════════════════════════════════════════

    pub fn join_club_handler(&self) -> JoinClubHandler {
        JoinClubHandler::new(self.clubs.clone(), self.memberships.clone())
    }

    pub fn expire_membership_handler(&self) -> ExpireMembershipHandler {
        ExpireMembershipHandler::new(self.memberships.clone(), self.clubs.clone())
    }

    pub fn membership_queries(&self) -> MembershipQueries {
        MembershipQueries::new(self.memberships.clone())
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Events
    // ════════════════════════════════════════════════════════════════════════════

    pub fn create_event_handler(&self) -> CreateEventHandler {
        CreateEventHandler::new(self.events.clone())
    }

    pub fn update_event_handler(&self) -> UpdateEventHandler {
        UpdateEventHandler::new(self.events.clone())
    }

    pub fn delete_event_handler(&self) -> DeleteEventHandler {
        DeleteEventHandler::new(self.events.clone())
    }

    pub fn event_queries(&self) -> EventQueries {
        EventQueries::new(self.events.clone())
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Registrations
    // ════════════════════════════════════════════════════════════════════════════

    pub fn register_for_event_handler(&self) -> RegisterForEventHandler {
        RegisterForEventHandler::new(self.events.clone(), self.registrations.clone())
    }

    pub fn cancel_registration_handler(&self) -> CancelRegistrationHandler {
        CancelRegistrationHandler::new(self.registrations.clone())
    }

    pub fn registration_queries(&self) -> RegistrationQueries {
        RegistrationQueries::new(self.registrations.clone())
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Payments
    // ════════════════════════════════════════════════════════════════════════════

    fn reconcile_payment_handler(&self) -> Arc<ReconcilePaymentHandler> {
        Arc::new(ReconcilePaymentHandler::new(
            self.clubs.clone(),
            self.payments.clone(),
            self.memberships.clone(),
        ))
    }

    pub fn start_checkout_handler(&self) -> StartCheckoutHandler {
        StartCheckoutHandler::new(
            self.clubs.clone(),
            self.memberships.clone(),
            self.checkout_provider.clone(),
        )
    }

    pub fn confirm_payment_handler(&self) -> ConfirmPaymentHandler {
        ConfirmPaymentHandler::new(
            self.checkout_provider.clone(),
            self.reconcile_payment_handler(),
        )
    }

    pub fn process_webhook_handler(&self) -> ProcessWebhookHandler {
        ProcessWebhookHandler::new(
            self.webhook_verifier.clone(),
            self.reconcile_payment_handler(),
        )
    }

    pub fn payment_queries(&self) -> PaymentQueries {
        PaymentQueries::new(self.payments.clone())
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Summaries
    // ════════════════════════════════════════════════════════════════════════════

    pub fn summary_queries(&self) -> SummaryQueries {
        SummaryQueries::new(self.summaries.clone())
    }
}
