//! HTTP DTOs for user endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::user::{Role, User};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request body for sign-in upsert.
///
/// The email always comes from the verified token, never the body; the
/// body only carries an optional display name override.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SignInRequest {
    #[serde(default)]
    pub display_name: Option<String>,
}

/// Request to change a user's role.
#[derive(Debug, Clone, Deserialize)]
pub struct SetRoleRequest {
    pub role: Role,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// A stored user.
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub display_name: Option<String>,
    pub role: Role,
    pub created_at: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            email: user.email.to_string(),
            display_name: user.display_name,
            role: user.role,
            created_at: user.created_at.as_datetime().to_rfc3339(),
        }
    }
}

/// Sign-in result: the user plus whether this was the first sign-in.
#[derive(Debug, Clone, Serialize)]
pub struct SignInResponse {
    pub message: &'static str,
    #[serde(flatten)]
    pub user: UserResponse,
}

/// Effective role for an email.
#[derive(Debug, Clone, Serialize)]
pub struct RoleResponse {
    pub email: String,
    pub role: Role,
}
