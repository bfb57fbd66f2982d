//! User roles.
//!
//! Every stored user carries exactly one role. Identities without a stored
//! row are treated as `member` (first sign-in races the user upsert, so the
//! lookup must not fail closed into an error).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Role gating which operations an identity may invoke.
///
/// Roles are flat, not hierarchical: an admin does not implicitly pass a
/// manager check. Manager-gated operations additionally verify resource
/// ownership by email.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Default role: may join clubs, register for events, pay.
    Member,

    /// May create and manage clubs and events they own.
    Manager,

    /// May review clubs, manage roles, and read global rollups.
    Admin,
}

impl Role {
    /// Returns the wire/storage representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Member => "member",
            Role::Manager => "manager",
            Role::Admin => "admin",
        }
    }
}

impl Default for Role {
    fn default() -> Self {
        Role::Member
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "member" => Ok(Role::Member),
            "manager" => Ok(Role::Manager),
            "admin" => Ok(Role::Admin),
            other => Err(ValidationError::invalid_format(
                "role",
                format!("unknown role '{}'", other),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trips_through_str() {
        for role in [Role::Member, Role::Manager, Role::Admin] {
            let parsed: Role = role.as_str().parse().unwrap();
            assert_eq!(parsed, role);
        }
    }

    #[test]
    fn role_rejects_unknown_string() {
        let result: Result<Role, _> = "superuser".parse();
        assert!(result.is_err());
    }

    #[test]
    fn role_defaults_to_member() {
        assert_eq!(Role::default(), Role::Member);
    }

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Manager).unwrap(), "\"manager\"");
        let role: Role = serde_json::from_str("\"admin\"").unwrap();
        assert_eq!(role, Role::Admin);
    }
}
