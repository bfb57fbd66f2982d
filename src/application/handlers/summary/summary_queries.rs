//! Query handlers for role dashboards.

use std::sync::Arc;

use crate::domain::foundation::{ClubId, DomainError, EmailAddress};
use crate::ports::{AdminSummary, ClubStats, ManagerSummary, MemberSummary, SummaryReader};

/// Read-side handler for the per-role dashboards.
pub struct SummaryQueries {
    summaries: Arc<dyn SummaryReader>,
}

impl SummaryQueries {
    pub fn new(summaries: Arc<dyn SummaryReader>) -> Self {
        Self { summaries }
    }

    /// Platform-wide totals for the admin dashboard.
    pub async fn admin(&self) -> Result<AdminSummary, DomainError> {
        self.summaries.admin_summary().await
    }

    /// Totals across the clubs the caller manages.
    pub async fn manager(
        &self,
        manager_email: &EmailAddress,
    ) -> Result<ManagerSummary, DomainError> {
        self.summaries.manager_summary(manager_email).await
    }

    /// The caller's own activity totals.
    pub async fn member(
        &self,
        member_email: &EmailAddress,
    ) -> Result<MemberSummary, DomainError> {
        self.summaries.member_summary(member_email).await
    }

    /// Per-club statistics for the admin club view.
    pub async fn club_stats(&self, club_id: &ClubId) -> Result<ClubStats, DomainError> {
        self.summaries.club_stats(club_id).await
    }
}
