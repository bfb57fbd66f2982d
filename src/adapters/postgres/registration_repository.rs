//! PostgreSQL implementation of RegistrationRepository.

use crate::domain::foundation::{DomainError, EmailAddress, ErrorCode, EventId, RegistrationId, Timestamp};
use crate::domain::registration::{EventRegistration, RegistrationStatus};
use crate::ports::{RegistrationRepository, RegistrationWithEvent};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// PostgreSQL implementation of the RegistrationRepository port.
///
/// Relies on the `event_registrations_live_idx` partial unique index to
/// keep at most one live registration per member per event.
pub struct PostgresRegistrationRepository {
    pool: PgPool,
}

impl PostgresRegistrationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row representation of a registration.
#[derive(Debug, sqlx::FromRow)]
struct RegistrationRow {
    id: Uuid,
    event_id: Uuid,
    member_email: String,
    status: String,
    registered_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Registration row joined with its event's display fields.
#[derive(Debug, sqlx::FromRow)]
struct RegistrationWithEventRow {
    id: Uuid,
    event_id: Uuid,
    member_email: String,
    status: String,
    registered_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    event_title: String,
    event_date: DateTime<Utc>,
    event_location: String,
}

impl TryFrom<RegistrationRow> for EventRegistration {
    type Error = DomainError;

    fn try_from(row: RegistrationRow) -> Result<Self, Self::Error> {
        Ok(EventRegistration {
            id: RegistrationId::from_uuid(row.id),
            event_id: EventId::from_uuid(row.event_id),
            member_email: EmailAddress::new(row.member_email).map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Invalid member_email: {}", e),
                )
            })?,
            status: parse_status(&row.status)?,
            registered_at: Timestamp::from_datetime(row.registered_at),
            updated_at: Timestamp::from_datetime(row.updated_at),
        })
    }
}

impl TryFrom<RegistrationWithEventRow> for RegistrationWithEvent {
    type Error = DomainError;

    fn try_from(row: RegistrationWithEventRow) -> Result<Self, Self::Error> {
        let registration = EventRegistration::try_from(RegistrationRow {
            id: row.id,
            event_id: row.event_id,
            member_email: row.member_email,
            status: row.status,
            registered_at: row.registered_at,
            updated_at: row.updated_at,
        })?;

        Ok(RegistrationWithEvent {
            registration,
            event_title: row.event_title,
            event_date: Timestamp::from_datetime(row.event_date),
            event_location: row.event_location,
        })
    }
}

fn parse_status(s: &str) -> Result<RegistrationStatus, DomainError> {
    match s {
        "registered" => Ok(RegistrationStatus::Registered),
        "canceled" => Ok(RegistrationStatus::Canceled),
        _ => Err(DomainError::new(
            ErrorCode::DatabaseError,
            format!("Invalid registration status value: {}", s),
        )),
    }
}

fn db_error(context: &str, e: sqlx::Error) -> DomainError {
    DomainError::new(ErrorCode::DatabaseError, format!("{}: {}", context, e))
}

#[async_trait]
impl RegistrationRepository for PostgresRegistrationRepository {
    async fn insert(&self, registration: &EventRegistration) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO event_registrations (
                id, event_id, member_email, status, registered_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(registration.id.as_uuid())
        .bind(registration.event_id.as_uuid())
        .bind(registration.member_email.as_str())
        .bind(registration.status.as_str())
        .bind(registration.registered_at.as_datetime())
        .bind(registration.updated_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.constraint() == Some("event_registrations_live_idx") {
                    return DomainError::new(
                        ErrorCode::RegistrationExists,
                        "Member is already registered for this event",
                    );
                }
            }
            db_error("Failed to insert registration", e)
        })?;

        Ok(())
    }

    async fn update(&self, registration: &EventRegistration) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE event_registrations SET
                status = $2,
                updated_at = $3
            WHERE id = $1
            "#,
        )
        .bind(registration.id.as_uuid())
        .bind(registration.status.as_str())
        .bind(registration.updated_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("Failed to update registration", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::RegistrationNotFound,
                "Registration not found",
            ));
        }

        Ok(())
    }

    async fn find_by_id(
        &self,
        id: &RegistrationId,
    ) -> Result<Option<EventRegistration>, DomainError> {
        let row: Option<RegistrationRow> = sqlx::query_as(
            r#"
            SELECT id, event_id, member_email, status, registered_at, updated_at
            FROM event_registrations
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("Failed to find registration", e))?;

        row.map(EventRegistration::try_from).transpose()
    }

    async fn find_live(
        &self,
        event_id: &EventId,
        member_email: &EmailAddress,
    ) -> Result<Option<EventRegistration>, DomainError> {
        let row: Option<RegistrationRow> = sqlx::query_as(
            r#"
            SELECT id, event_id, member_email, status, registered_at, updated_at
            FROM event_registrations
            WHERE event_id = $1
              AND member_email = $2
              AND status = 'registered'
            "#,
        )
        .bind(event_id.as_uuid())
        .bind(member_email.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("Failed to find live registration", e))?;

        row.map(EventRegistration::try_from).transpose()
    }

    async fn list_by_member(
        &self,
        member_email: &EmailAddress,
    ) -> Result<Vec<RegistrationWithEvent>, DomainError> {
        let rows: Vec<RegistrationWithEventRow> = sqlx::query_as(
            r#"
            SELECT r.id, r.event_id, r.member_email, r.status, r.registered_at,
                   r.updated_at, e.title AS event_title, e.event_date,
                   e.location AS event_location
            FROM event_registrations r
            JOIN events e ON e.id = r.event_id
            WHERE r.member_email = $1
            ORDER BY r.registered_at DESC
            "#,
        )
        .bind(member_email.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("Failed to list registrations by member", e))?;

        rows.into_iter()
            .map(RegistrationWithEvent::try_from)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_status_works_for_all_values() {
        assert_eq!(
            parse_status("registered").unwrap(),
            RegistrationStatus::Registered
        );
        assert_eq!(
            parse_status("canceled").unwrap(),
            RegistrationStatus::Canceled
        );
    }

    #[test]
    fn parse_status_rejects_invalid_values() {
        assert!(parse_status("cancelled").is_err());
        assert!(parse_status("").is_err());
    }
}
