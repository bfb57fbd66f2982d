//! PostgreSQL adapters.
//!
//! sqlx-backed implementations of the repository and reader ports.
//! Uniqueness rules (one live membership per member per club, one live
//! registration per member per event, one payment per member per club)
//! are enforced by database indexes, not by read-then-write checks.

mod club_repository;
mod event_repository;
mod membership_repository;
mod payment_repository;
mod registration_repository;
mod summary_reader;
mod user_repository;

pub use club_repository::PostgresClubRepository;
pub use event_repository::PostgresEventRepository;
pub use membership_repository::PostgresMembershipRepository;
pub use payment_repository::PostgresPaymentRepository;
pub use registration_repository::PostgresRegistrationRepository;
pub use summary_reader::PostgresSummaryReader;
pub use user_repository::PostgresUserRepository;
