//! SignInHandler - Command handler for upsert-on-first-sign-in.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, EmailAddress, UserRecordId};
use crate::domain::user::User;
use crate::ports::UserRepository;

/// Command recording that an identity signed in.
#[derive(Debug, Clone)]
pub struct SignInCommand {
    pub email: EmailAddress,
    pub display_name: Option<String>,
}

/// Result of a sign-in upsert.
#[derive(Debug, Clone)]
pub struct SignInResult {
    /// The stored user. When the email was already registered this is the
    /// existing row, role and all.
    pub user: User,
    /// True when this sign-in created the row.
    pub created: bool,
}

/// Handler for the sign-in upsert.
///
/// The identity provider owns authentication; this just materializes a
/// row the first time an email shows up. Repeat sign-ins return the
/// stored user unchanged, so an admin-assigned role survives.
pub struct SignInHandler {
    users: Arc<dyn UserRepository>,
}

impl SignInHandler {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    pub async fn handle(&self, cmd: SignInCommand) -> Result<SignInResult, DomainError> {
        let candidate = User::register(UserRecordId::new(), cmd.email, cmd.display_name);
        let outcome = self.users.upsert(&candidate).await?;

        Ok(SignInResult {
            user: outcome.user,
            created: outcome.inserted,
        })
    }
}
