//! HTTP DTOs for club endpoints.

use serde::{Deserialize, Serialize};

use crate::application::ReviewDecision;
use crate::domain::club::{Club, ClubStatus, ClubUpdate};
use crate::ports::ClubStats;

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to create a club. It enters the review queue as pending.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateClubRequest {
    pub name: String,
    pub description: String,
    pub category: String,
    pub location: String,
    #[serde(default)]
    pub membership_fee: i64,
    #[serde(default)]
    pub banner_url: Option<String>,
}

/// Partial update; absent fields keep their stored value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateClubRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub location: Option<String>,
    pub membership_fee: Option<i64>,
    pub banner_url: Option<String>,
}

impl From<UpdateClubRequest> for ClubUpdate {
    fn from(req: UpdateClubRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
            category: req.category,
            location: req.location,
            membership_fee: req.membership_fee,
            banner_url: req.banner_url,
        }
    }
}

/// Admin verdict on a pending club.
#[derive(Debug, Clone, Deserialize)]
pub struct ReviewClubRequest {
    pub decision: ReviewDecision,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// A club as returned by the API.
#[derive(Debug, Clone, Serialize)]
pub struct ClubResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub location: String,
    pub membership_fee: i64,
    pub banner_url: Option<String>,
    pub manager_email: String,
    pub status: ClubStatus,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Club> for ClubResponse {
    fn from(club: Club) -> Self {
        Self {
            id: club.id.to_string(),
            name: club.name,
            description: club.description,
            category: club.category,
            location: club.location,
            membership_fee: club.membership_fee,
            banner_url: club.banner_url,
            manager_email: club.manager_email.to_string(),
            status: club.status,
            created_at: club.created_at.as_datetime().to_rfc3339(),
            updated_at: club.updated_at.as_datetime().to_rfc3339(),
        }
    }
}

/// Per-club counters for the admin view.
#[derive(Debug, Clone, Serialize)]
pub struct ClubStatsResponse {
    pub member_count: i64,
    pub event_count: i64,
}

impl From<ClubStats> for ClubStatsResponse {
    fn from(stats: ClubStats) -> Self {
        Self {
            member_count: stats.member_count,
            event_count: stats.event_count,
        }
    }
}
