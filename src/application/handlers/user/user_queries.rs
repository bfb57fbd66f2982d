//! Query handlers for user reads.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, EmailAddress};
use crate::domain::user::{Role, User};
use crate::ports::UserRepository;

/// Read-side handler for user lists and role lookups.
pub struct UserQueries {
    users: Arc<dyn UserRepository>,
}

impl UserQueries {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    /// All users, newest first. Admin-gated at the HTTP layer.
    pub async fn list_all(&self) -> Result<Vec<User>, DomainError> {
        self.users.list_all().await
    }

    /// The stored user for an email, if one has signed in.
    pub async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<User>, DomainError> {
        self.users.find_by_email(email).await
    }

    /// The effective role for an email.
    ///
    /// Identities with no stored row act as plain members; an unknown
    /// email is not an error.
    pub async fn role_for_email(&self, email: &EmailAddress) -> Result<Role, DomainError> {
        Ok(self
            .users
            .find_by_email(email)
            .await?
            .map(|u| u.role)
            .unwrap_or_default())
    }
}
