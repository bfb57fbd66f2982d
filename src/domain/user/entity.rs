//! User entity.
//!
//! A user row is created on first sign-in and never deleted. The identity
//! provider owns authentication; this entity only records the email we key
//! everything else by, plus the role an admin may later assign.
//!
//! # Design Decisions
//!
//! - **Email is the identity key**: memberships, registrations, and payments
//!   reference users by email, matching the token's verified claim
//! - **Role changes are admin-only**: enforced by the authorization policy,
//!   the entity just records the new value

use crate::domain::foundation::{EmailAddress, Timestamp, UserRecordId};
use serde::{Deserialize, Serialize};

use super::Role;

/// Stored user record.
///
/// # Invariants
///
/// - `id` is globally unique
/// - `email` is unique (one row per identity)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for this user row.
    pub id: UserRecordId,

    /// Verified email from the identity provider.
    pub email: EmailAddress,

    /// Display name if the provider reported one.
    pub display_name: Option<String>,

    /// Current role.
    pub role: Role,

    /// When the user first signed in.
    pub created_at: Timestamp,
}

impl User {
    /// Creates the row for a first sign-in. New users are always members.
    pub fn register(id: UserRecordId, email: EmailAddress, display_name: Option<String>) -> Self {
        Self {
            id,
            email,
            display_name,
            role: Role::Member,
            created_at: Timestamp::now(),
        }
    }

    /// Assigns a new role. The caller is responsible for having passed the
    /// admin policy gate first.
    pub fn set_role(&mut self, role: Role) {
        self.role = role;
    }

    /// True when this user may manage clubs.
    pub fn is_manager(&self) -> bool {
        self.role == Role::Manager
    }

    /// True when this user may administer the platform.
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_email() -> EmailAddress {
        EmailAddress::new("alice@example.com").unwrap()
    }

    // Construction tests

    #[test]
    fn register_creates_member() {
        let user = User::register(UserRecordId::new(), test_email(), Some("Alice".to_string()));

        assert_eq!(user.role, Role::Member);
        assert_eq!(user.email.as_str(), "alice@example.com");
        assert_eq!(user.display_name, Some("Alice".to_string()));
        assert!(!user.is_manager());
        assert!(!user.is_admin());
    }

    #[test]
    fn register_without_display_name() {
        let user = User::register(UserRecordId::new(), test_email(), None);
        assert!(user.display_name.is_none());
    }

    // Role tests

    #[test]
    fn set_role_promotes_to_manager() {
        let mut user = User::register(UserRecordId::new(), test_email(), None);
        user.set_role(Role::Manager);

        assert_eq!(user.role, Role::Manager);
        assert!(user.is_manager());
        assert!(!user.is_admin());
    }

    #[test]
    fn set_role_promotes_to_admin() {
        let mut user = User::register(UserRecordId::new(), test_email(), None);
        user.set_role(Role::Admin);

        assert!(user.is_admin());
    }

    #[test]
    fn set_role_can_demote() {
        let mut user = User::register(UserRecordId::new(), test_email(), None);
        user.set_role(Role::Admin);
        user.set_role(Role::Member);

        assert_eq!(user.role, Role::Member);
    }
}
