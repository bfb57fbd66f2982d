//! User repository port.
//!
//! Defines the contract for persisting and retrieving platform users.
//! Users are registered lazily at first sign-in, so the central operation
//! is an upsert keyed by email.
//!
//! # Design
//!
//! - **Email is the identity key**: every lookup the rest of the system
//!   performs goes through the email address
//! - **Upsert, not insert**: sign-in repeats; the first write wins and
//!   later writes return the stored user unchanged

use crate::domain::foundation::{DomainError, EmailAddress, UserRecordId};
use crate::domain::user::{Role, User};
use async_trait::async_trait;

/// Outcome of an upsert, reporting whether a row was written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpsertOutcome {
    /// The user as stored (the existing row when one was already present).
    pub user: User,
    /// True when this call created the row.
    pub inserted: bool,
}

/// Repository port for User persistence.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert the user unless one with the same email already exists.
    ///
    /// Returns the stored user either way, flagging whether an insert
    /// happened.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn upsert(&self, user: &User) -> Result<UpsertOutcome, DomainError>;

    /// Find a user by their record id.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &UserRecordId) -> Result<Option<User>, DomainError>;

    /// Find a user by email.
    ///
    /// Returns `None` if not found. This is the primary lookup since
    /// authentication hands us an email.
    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, DomainError>;

    /// List all users, newest first.
    async fn list_all(&self) -> Result<Vec<User>, DomainError>;

    /// Set a user's role.
    ///
    /// # Errors
    ///
    /// - `UserNotFound` if no user with this id exists
    /// - `DatabaseError` on persistence failure
    async fn set_role(&self, id: &UserRecordId, role: Role) -> Result<(), DomainError>;
}
