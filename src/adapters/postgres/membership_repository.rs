//! PostgreSQL implementation of MembershipRepository.

use crate::domain::foundation::{ClubId, DomainError, EmailAddress, ErrorCode, MembershipId, Timestamp};
use crate::domain::membership::{Membership, MembershipStatus};
use crate::ports::{MembershipRepository, MembershipWithClub};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// PostgreSQL implementation of the MembershipRepository port.
///
/// Relies on the `memberships_live_idx` partial unique index to keep at
/// most one live (pending or active) membership per member per club.
pub struct PostgresMembershipRepository {
    pool: PgPool,
}

impl PostgresMembershipRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row representation of a membership.
#[derive(Debug, sqlx::FromRow)]
struct MembershipRow {
    id: Uuid,
    club_id: Uuid,
    member_email: String,
    status: String,
    joined_at: DateTime<Utc>,
    paid_at: Option<DateTime<Utc>>,
    updated_at: DateTime<Utc>,
}

/// Membership row joined with its club's directory fields.
#[derive(Debug, sqlx::FromRow)]
struct MembershipWithClubRow {
    id: Uuid,
    club_id: Uuid,
    member_email: String,
    status: String,
    joined_at: DateTime<Utc>,
    paid_at: Option<DateTime<Utc>>,
    updated_at: DateTime<Utc>,
    club_name: String,
    club_category: String,
    club_fee: i64,
}

impl TryFrom<MembershipRow> for Membership {
    type Error = DomainError;

    fn try_from(row: MembershipRow) -> Result<Self, Self::Error> {
        Ok(Membership {
            id: MembershipId::from_uuid(row.id),
            club_id: ClubId::from_uuid(row.club_id),
            member_email: EmailAddress::new(row.member_email).map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Invalid member_email: {}", e),
                )
            })?,
            status: parse_status(&row.status)?,
            joined_at: Timestamp::from_datetime(row.joined_at),
            paid_at: row.paid_at.map(Timestamp::from_datetime),
            updated_at: Timestamp::from_datetime(row.updated_at),
        })
    }
}

impl TryFrom<MembershipWithClubRow> for MembershipWithClub {
    type Error = DomainError;

    fn try_from(row: MembershipWithClubRow) -> Result<Self, Self::Error> {
        let membership = Membership::try_from(MembershipRow {
            id: row.id,
            club_id: row.club_id,
            member_email: row.member_email,
            status: row.status,
            joined_at: row.joined_at,
            paid_at: row.paid_at,
            updated_at: row.updated_at,
        })?;

        Ok(MembershipWithClub {
            membership,
            club_name: row.club_name,
            club_category: row.club_category,
            club_fee: row.club_fee,
        })
    }
}

fn parse_status(s: &str) -> Result<MembershipStatus, DomainError> {
    match s {
        "pending_payment" => Ok(MembershipStatus::PendingPayment),
        "active" => Ok(MembershipStatus::Active),
        "expired" => Ok(MembershipStatus::Expired),
        "canceled" => Ok(MembershipStatus::Canceled),
        _ => Err(DomainError::new(
            ErrorCode::DatabaseError,
            format!("Invalid membership status value: {}", s),
        )),
    }
}

fn db_error(context: &str, e: sqlx::Error) -> DomainError {
    DomainError::new(ErrorCode::DatabaseError, format!("{}: {}", context, e))
}

#[async_trait]
impl MembershipRepository for PostgresMembershipRepository {
    async fn insert(&self, membership: &Membership) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO memberships (
                id, club_id, member_email, status, joined_at, paid_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(membership.id.as_uuid())
        .bind(membership.club_id.as_uuid())
        .bind(membership.member_email.as_str())
        .bind(membership.status.as_str())
        .bind(membership.joined_at.as_datetime())
        .bind(membership.paid_at.as_ref().map(Timestamp::as_datetime))
        .bind(membership.updated_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.constraint() == Some("memberships_live_idx") {
                    return DomainError::new(
                        ErrorCode::MembershipExists,
                        "Member already has a live membership in this club",
                    );
                }
            }
            db_error("Failed to insert membership", e)
        })?;

        Ok(())
    }

    async fn update(&self, membership: &Membership) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE memberships SET
                status = $2,
                paid_at = $3,
                updated_at = $4
            WHERE id = $1
            "#,
        )
        .bind(membership.id.as_uuid())
        .bind(membership.status.as_str())
        .bind(membership.paid_at.as_ref().map(Timestamp::as_datetime))
        .bind(membership.updated_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("Failed to update membership", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::MembershipNotFound,
                "Membership not found",
            ));
        }

        Ok(())
    }

    async fn find_by_id(&self, id: &MembershipId) -> Result<Option<Membership>, DomainError> {
        let row: Option<MembershipRow> = sqlx::query_as(
            r#"
            SELECT id, club_id, member_email, status, joined_at, paid_at, updated_at
            FROM memberships
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("Failed to find membership", e))?;

        row.map(Membership::try_from).transpose()
    }

    async fn find_live(
        &self,
        club_id: &ClubId,
        member_email: &EmailAddress,
    ) -> Result<Option<Membership>, DomainError> {
        let row: Option<MembershipRow> = sqlx::query_as(
            r#"
            SELECT id, club_id, member_email, status, joined_at, paid_at, updated_at
            FROM memberships
            WHERE club_id = $1
              AND member_email = $2
              AND status IN ('pending_payment', 'active')
            "#,
        )
        .bind(club_id.as_uuid())
        .bind(member_email.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("Failed to find live membership", e))?;

        row.map(Membership::try_from).transpose()
    }

    async fn list_by_member(
        &self,
        member_email: &EmailAddress,
    ) -> Result<Vec<MembershipWithClub>, DomainError> {
        let rows: Vec<MembershipWithClubRow> = sqlx::query_as(
            r#"
            SELECT m.id, m.club_id, m.member_email, m.status, m.joined_at, m.paid_at,
                   m.updated_at, c.name AS club_name, c.category AS club_category,
                   c.membership_fee AS club_fee
            FROM memberships m
            JOIN clubs c ON c.id = m.club_id
            WHERE m.member_email = $1
            ORDER BY m.joined_at DESC
            "#,
        )
        .bind(member_email.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("Failed to list memberships by member", e))?;

        rows.into_iter().map(MembershipWithClub::try_from).collect()
    }

    async fn list_by_manager(
        &self,
        manager_email: &EmailAddress,
    ) -> Result<Vec<MembershipWithClub>, DomainError> {
        let rows: Vec<MembershipWithClubRow> = sqlx::query_as(
            r#"
            SELECT m.id, m.club_id, m.member_email, m.status, m.joined_at, m.paid_at,
                   m.updated_at, c.name AS club_name, c.category AS club_category,
                   c.membership_fee AS club_fee
            FROM memberships m
            JOIN clubs c ON c.id = m.club_id
            WHERE c.manager_email = $1
            ORDER BY m.joined_at DESC
            "#,
        )
        .bind(manager_email.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("Failed to list memberships by manager", e))?;

        rows.into_iter().map(MembershipWithClub::try_from).collect()
    }
}
