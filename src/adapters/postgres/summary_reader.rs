//! PostgreSQL implementation of SummaryReader.
//!
//! Read-optimized aggregation queries for the role dashboards. Each
//! summary is one or two round trips; counting happens in SQL.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{ClubId, DomainError, EmailAddress, ErrorCode, EventId, Timestamp};
use crate::ports::{
    AdminSummary, ClubStats, ManagerSummary, MemberSummary, SummaryReader, UpcomingEvent,
};

/// PostgreSQL implementation of SummaryReader.
#[derive(Clone)]
pub struct PostgresSummaryReader {
    pool: PgPool,
}

impl PostgresSummaryReader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Member count includes every membership that has not expired, so
/// pending and canceled rows still count toward the club's size.
const CLUB_STATS_SQL: &str = r#"
    SELECT
        (SELECT COUNT(*) FROM memberships
            WHERE club_id = $1 AND status <> 'expired') AS member_count,
        (SELECT COUNT(*) FROM events WHERE club_id = $1) AS event_count
"#;

fn db_error(context: &str, e: sqlx::Error) -> DomainError {
    DomainError::new(ErrorCode::DatabaseError, format!("{}: {}", context, e))
}

#[async_trait]
impl SummaryReader for PostgresSummaryReader {
    async fn admin_summary(&self) -> Result<AdminSummary, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT
                (SELECT COUNT(*) FROM users) AS total_users,
                (SELECT COUNT(*) FROM clubs) AS total_clubs,
                (SELECT COUNT(*) FROM clubs WHERE status = 'approved') AS approved_clubs,
                (SELECT COUNT(*) FROM clubs WHERE status = 'pending') AS pending_clubs,
                (SELECT COUNT(*) FROM clubs WHERE status = 'rejected') AS rejected_clubs,
                (SELECT COUNT(*) FROM memberships) AS total_memberships,
                (SELECT COUNT(*) FROM events) AS total_events,
                (SELECT COALESCE(SUM(amount), 0) FROM payments) AS total_revenue
            "#,
        )
        .fetch_one(&self.pool)
        .await
        .map_err(|e| db_error("Failed to load admin summary", e))?;

        Ok(AdminSummary {
            total_users: row.get("total_users"),
            total_clubs: row.get("total_clubs"),
            approved_clubs: row.get("approved_clubs"),
            pending_clubs: row.get("pending_clubs"),
            rejected_clubs: row.get("rejected_clubs"),
            total_memberships: row.get("total_memberships"),
            total_events: row.get("total_events"),
            total_revenue: row.get("total_revenue"),
        })
    }

    async fn manager_summary(
        &self,
        manager_email: &EmailAddress,
    ) -> Result<ManagerSummary, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT
                (SELECT COUNT(*) FROM clubs WHERE manager_email = $1) AS club_count,
                (SELECT COUNT(*) FROM memberships m
                    JOIN clubs c ON c.id = m.club_id
                    WHERE c.manager_email = $1 AND m.status = 'active') AS member_count,
                (SELECT COUNT(*) FROM events WHERE created_by = $1) AS event_count,
                (SELECT COALESCE(SUM(p.amount), 0) FROM payments p
                    JOIN clubs c ON c.id = p.club_id
                    WHERE c.manager_email = $1) AS total_revenue
            "#,
        )
        .bind(manager_email.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| db_error("Failed to load manager summary", e))?;

        Ok(ManagerSummary {
            club_count: row.get("club_count"),
            member_count: row.get("member_count"),
            event_count: row.get("event_count"),
            total_revenue: row.get("total_revenue"),
        })
    }

    async fn member_summary(
        &self,
        member_email: &EmailAddress,
    ) -> Result<MemberSummary, DomainError> {
        let totals = sqlx::query(
            r#"
            SELECT
                (SELECT COUNT(*) FROM memberships
                    WHERE member_email = $1 AND status = 'active') AS joined_clubs,
                (SELECT COUNT(*) FROM event_registrations
                    WHERE member_email = $1 AND status = 'registered') AS registration_count
            "#,
        )
        .bind(member_email.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| db_error("Failed to load member summary", e))?;

        // Upcoming events in the member's active clubs, soonest first
        let event_rows = sqlx::query(
            r#"
            SELECT e.id, e.title, e.event_date, e.location
            FROM events e
            JOIN memberships m ON m.club_id = e.club_id
            WHERE m.member_email = $1
              AND m.status = 'active'
              AND e.event_date > NOW()
            ORDER BY e.event_date ASC
            "#,
        )
        .bind(member_email.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("Failed to load upcoming events", e))?;

        let upcoming_events = event_rows
            .into_iter()
            .map(|row| UpcomingEvent {
                event_id: EventId::from_uuid(row.get("id")),
                title: row.get("title"),
                event_date: Timestamp::from_datetime(row.get("event_date")),
                location: row.get("location"),
            })
            .collect();

        Ok(MemberSummary {
            joined_clubs: totals.get("joined_clubs"),
            registration_count: totals.get("registration_count"),
            upcoming_events,
        })
    }

    async fn club_stats(&self, club_id: &ClubId) -> Result<ClubStats, DomainError> {
        let exists = sqlx::query("SELECT 1 AS one FROM clubs WHERE id = $1")
            .bind(club_id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("Failed to check club", e))?;

        if exists.is_none() {
            return Err(DomainError::new(ErrorCode::ClubNotFound, "Club not found"));
        }

        let row = sqlx::query(CLUB_STATS_SQL)
            .bind(club_id.as_uuid())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| db_error("Failed to load club stats", e))?;

        Ok(ClubStats {
            member_count: row.get("member_count"),
            event_count: row.get("event_count"),
        })
    }
}
