//! HTTP DTOs for the role-scoped summary endpoints.

use serde::Serialize;

use crate::ports::{AdminSummary, ManagerSummary, MemberSummary, UpcomingEvent};

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
pub struct AdminSummaryResponse {
    pub total_users: i64,
    pub total_clubs: i64,
    pub approved_clubs: i64,
    pub pending_clubs: i64,
    pub rejected_clubs: i64,
    pub total_memberships: i64,
    pub total_events: i64,
    pub total_revenue: i64,
}

impl From<AdminSummary> for AdminSummaryResponse {
    fn from(s: AdminSummary) -> Self {
        Self {
            total_users: s.total_users,
            total_clubs: s.total_clubs,
            approved_clubs: s.approved_clubs,
            pending_clubs: s.pending_clubs,
            rejected_clubs: s.rejected_clubs,
            total_memberships: s.total_memberships,
            total_events: s.total_events,
            total_revenue: s.total_revenue,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ManagerSummaryResponse {
    pub club_count: i64,
    pub member_count: i64,
    pub event_count: i64,
    pub total_revenue: i64,
}

impl From<ManagerSummary> for ManagerSummaryResponse {
    fn from(s: ManagerSummary) -> Self {
        Self {
            club_count: s.club_count,
            member_count: s.member_count,
            event_count: s.event_count,
            total_revenue: s.total_revenue,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct UpcomingEventResponse {
    pub event_id: String,
    pub title: String,
    pub event_date: String,
    pub location: String,
}

impl From<UpcomingEvent> for UpcomingEventResponse {
    fn from(e: UpcomingEvent) -> Self {
        Self {
            event_id: e.event_id.to_string(),
            title: e.title,
            event_date: e.event_date.as_datetime().to_rfc3339(),
            location: e.location,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MemberSummaryResponse {
    pub joined_clubs: i64,
    pub registration_count: i64,
    pub upcoming_events: Vec<UpcomingEventResponse>,
}

impl From<MemberSummary> for MemberSummaryResponse {
    fn from(s: MemberSummary) -> Self {
        Self {
            joined_clubs: s.joined_clubs,
            registration_count: s.registration_count,
            upcoming_events: s
                .upcoming_events
                .into_iter()
                .map(UpcomingEventResponse::from)
                .collect(),
        }
    }
}
