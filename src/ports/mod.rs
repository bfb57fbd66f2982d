//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Persistence Ports
//!
//! - `UserRepository` - Platform users and role assignment
//! - `ClubRepository` - Clubs, review queue, and directory search
//! - `MembershipRepository` - Join-a-club lifecycle rows
//! - `EventRepository` - Events and event search
//! - `RegistrationRepository` - Event registrations
//! - `PaymentRepository` - Append-only payment records
//! - `SummaryReader` - Cross-table dashboard aggregations
//!
//! ## External Service Ports
//!
//! - `TokenVerifier` - Identity token verification (Firebase etc.)
//! - `CheckoutProvider` - Hosted checkout sessions (Stripe etc.)

mod checkout_provider;
mod club_repository;
mod event_repository;
mod membership_repository;
mod payment_repository;
mod registration_repository;
mod summary_reader;
mod token_verifier;
mod user_repository;

pub use checkout_provider::{
    CheckoutError, CheckoutErrorCode, CheckoutProvider, CheckoutSession, CreateCheckoutRequest,
    RetrievedSession,
};
pub use club_repository::ClubRepository;
pub use event_repository::EventRepository;
pub use membership_repository::{MembershipRepository, MembershipWithClub};
pub use payment_repository::PaymentRepository;
pub use registration_repository::{RegistrationRepository, RegistrationWithEvent};
pub use summary_reader::{
    AdminSummary, ClubStats, ManagerSummary, MemberSummary, SummaryReader, UpcomingEvent,
};
pub use token_verifier::TokenVerifier;
pub use user_repository::{UpsertOutcome, UserRepository};
