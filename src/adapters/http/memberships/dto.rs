//! HTTP DTOs for membership endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::membership::{Membership, MembershipStatus};
use crate::ports::MembershipWithClub;

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to join a club.
///
/// `club_id` is optional at the serde level so a missing field produces a
/// 400 with a stable error body instead of a deserialization rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JoinClubRequest {
    #[serde(default)]
    pub club_id: Option<String>,
}

/// Query string for the own-membership lookup.
#[derive(Debug, Clone, Deserialize)]
pub struct MyMembershipQuery {
    pub club_id: String,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// A membership as returned by the API.
#[derive(Debug, Clone, Serialize)]
pub struct MembershipResponse {
    pub id: String,
    pub club_id: String,
    pub member_email: String,
    pub status: MembershipStatus,
    pub joined_at: String,
    pub paid_at: Option<String>,
    pub updated_at: String,
}

impl From<Membership> for MembershipResponse {
    fn from(m: Membership) -> Self {
        Self {
            id: m.id.to_string(),
            club_id: m.club_id.to_string(),
            member_email: m.member_email.to_string(),
            status: m.status,
            joined_at: m.joined_at.as_datetime().to_rfc3339(),
            paid_at: m.paid_at.map(|t| t.as_datetime().to_rfc3339()),
            updated_at: m.updated_at.as_datetime().to_rfc3339(),
        }
    }
}

/// A membership joined with the club it belongs to, for list views.
#[derive(Debug, Clone, Serialize)]
pub struct MembershipWithClubResponse {
    #[serde(flatten)]
    pub membership: MembershipResponse,
    pub club_name: String,
    pub club_category: String,
    pub club_fee: i64,
}

impl From<MembershipWithClub> for MembershipWithClubResponse {
    fn from(row: MembershipWithClub) -> Self {
        Self {
            membership: MembershipResponse::from(row.membership),
            club_name: row.club_name,
            club_category: row.club_category,
            club_fee: row.club_fee,
        }
    }
}
