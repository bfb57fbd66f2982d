//! Summary reader port for dashboard queries.
//!
//! Read-only aggregations spanning several tables at once. Each role's
//! dashboard gets one round trip.
//!
//! # Design
//!
//! - **Read-optimized**: implementations aggregate in SQL (COUNT/SUM),
//!   never by loading aggregates into memory
//! - **Separated from write**: no repository churn for dashboard tweaks

use crate::domain::foundation::{ClubId, DomainError, EmailAddress, EventId, Timestamp};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Reader port for role dashboards and club statistics.
#[async_trait]
pub trait SummaryReader: Send + Sync {
    /// Platform-wide totals for the admin dashboard.
    async fn admin_summary(&self) -> Result<AdminSummary, DomainError>;

    /// Totals across the clubs the given manager owns.
    async fn manager_summary(
        &self,
        manager_email: &EmailAddress,
    ) -> Result<ManagerSummary, DomainError>;

    /// The member's own activity totals.
    async fn member_summary(
        &self,
        member_email: &EmailAddress,
    ) -> Result<MemberSummary, DomainError>;

    /// Per-club statistics for the admin club view.
    ///
    /// # Errors
    ///
    /// - `ClubNotFound` if the club doesn't exist
    async fn club_stats(&self, club_id: &ClubId) -> Result<ClubStats, DomainError>;
}

/// Platform-wide totals for the admin dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminSummary {
    /// Total registered users.
    pub total_users: i64,

    /// Total clubs in any status.
    pub total_clubs: i64,

    /// Clubs currently approved.
    pub approved_clubs: i64,

    /// Clubs awaiting review.
    pub pending_clubs: i64,

    /// Clubs rejected.
    pub rejected_clubs: i64,

    /// Total memberships in any status.
    pub total_memberships: i64,

    /// Total events.
    pub total_events: i64,

    /// Sum of all confirmed payment amounts, in minor units.
    pub total_revenue: i64,
}

/// Totals across the clubs one manager owns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagerSummary {
    /// Clubs the manager owns.
    pub club_count: i64,

    /// Active members across those clubs.
    pub member_count: i64,

    /// Events the manager created.
    pub event_count: i64,

    /// Confirmed payment revenue across those clubs, in minor units.
    pub total_revenue: i64,
}

/// One member's activity totals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberSummary {
    /// Clubs the member actively belongs to.
    pub joined_clubs: i64,

    /// Live event registrations.
    pub registration_count: i64,

    /// Upcoming events in the member's clubs, soonest first.
    pub upcoming_events: Vec<UpcomingEvent>,
}

/// Upcoming event entry in the member summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpcomingEvent {
    /// Event identifier.
    pub event_id: EventId,

    /// Event title.
    pub title: String,

    /// When the event takes place.
    pub event_date: Timestamp,

    /// Where the event takes place.
    pub location: String,
}

/// Per-club statistics for the admin club view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClubStats {
    /// Members whose membership has not expired.
    pub member_count: i64,

    /// Events attached to the club.
    pub event_count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trait object safety test
    #[test]
    fn summary_reader_is_object_safe() {
        fn _accepts_dyn(_reader: &dyn SummaryReader) {}
    }

    #[test]
    fn summaries_default_to_zero() {
        let summary = AdminSummary::default();
        assert_eq!(summary.total_users, 0);
        assert_eq!(summary.total_revenue, 0);

        let member = MemberSummary::default();
        assert!(member.upcoming_events.is_empty());
    }
}
