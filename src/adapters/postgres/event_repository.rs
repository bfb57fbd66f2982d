//! PostgreSQL implementation of EventRepository.

use crate::domain::event::Event;
use crate::domain::foundation::{ClubId, DomainError, EmailAddress, ErrorCode, EventId, Timestamp};
use crate::ports::EventRepository;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// PostgreSQL implementation of the EventRepository port.
pub struct PostgresEventRepository {
    pool: PgPool,
}

impl PostgresEventRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const EVENT_COLUMNS: &str = "id, title, description, location, event_date, is_paid, fee, \
                             club_id, created_by, created_at, updated_at";

/// Database row representation of an event.
#[derive(Debug, sqlx::FromRow)]
struct EventRow {
    id: Uuid,
    title: String,
    description: String,
    location: String,
    event_date: DateTime<Utc>,
    is_paid: bool,
    fee: i64,
    club_id: Option<Uuid>,
    created_by: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<EventRow> for Event {
    type Error = DomainError;

    fn try_from(row: EventRow) -> Result<Self, Self::Error> {
        Ok(Event {
            id: EventId::from_uuid(row.id),
            title: row.title,
            description: row.description,
            location: row.location,
            event_date: Timestamp::from_datetime(row.event_date),
            is_paid: row.is_paid,
            fee: row.fee,
            club_id: row.club_id.map(ClubId::from_uuid),
            created_by: EmailAddress::new(row.created_by).map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Invalid created_by: {}", e),
                )
            })?,
            created_at: Timestamp::from_datetime(row.created_at),
            updated_at: Timestamp::from_datetime(row.updated_at),
        })
    }
}

fn db_error(context: &str, e: sqlx::Error) -> DomainError {
    DomainError::new(ErrorCode::DatabaseError, format!("{}: {}", context, e))
}

#[async_trait]
impl EventRepository for PostgresEventRepository {
    async fn insert(&self, event: &Event) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO events (
                id, title, description, location, event_date, is_paid, fee,
                club_id, created_by, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(event.id.as_uuid())
        .bind(&event.title)
        .bind(&event.description)
        .bind(&event.location)
        .bind(event.event_date.as_datetime())
        .bind(event.is_paid)
        .bind(event.fee)
        .bind(event.club_id.as_ref().map(ClubId::as_uuid))
        .bind(event.created_by.as_str())
        .bind(event.created_at.as_datetime())
        .bind(event.updated_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("Failed to insert event", e))?;

        Ok(())
    }

    async fn update(&self, event: &Event) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE events SET
                title = $2,
                description = $3,
                location = $4,
                event_date = $5,
                is_paid = $6,
                fee = $7,
                updated_at = $8
            WHERE id = $1
            "#,
        )
        .bind(event.id.as_uuid())
        .bind(&event.title)
        .bind(&event.description)
        .bind(&event.location)
        .bind(event.event_date.as_datetime())
        .bind(event.is_paid)
        .bind(event.fee)
        .bind(event.updated_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("Failed to update event", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::EventNotFound,
                "Event not found",
            ));
        }

        Ok(())
    }

    async fn delete(&self, id: &EventId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to delete event", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::EventNotFound,
                "Event not found",
            ));
        }

        Ok(())
    }

    async fn find_by_id(&self, id: &EventId) -> Result<Option<Event>, DomainError> {
        let row: Option<EventRow> = sqlx::query_as(&format!(
            "SELECT {} FROM events WHERE id = $1",
            EVENT_COLUMNS
        ))
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("Failed to find event", e))?;

        row.map(Event::try_from).transpose()
    }

    async fn list_all(&self) -> Result<Vec<Event>, DomainError> {
        let rows: Vec<EventRow> = sqlx::query_as(&format!(
            "SELECT {} FROM events ORDER BY event_date ASC",
            EVENT_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("Failed to list events", e))?;

        rows.into_iter().map(Event::try_from).collect()
    }

    async fn list_by_creator(
        &self,
        created_by: &EmailAddress,
    ) -> Result<Vec<Event>, DomainError> {
        let rows: Vec<EventRow> = sqlx::query_as(&format!(
            "SELECT {} FROM events WHERE created_by = $1 ORDER BY event_date ASC",
            EVENT_COLUMNS
        ))
        .bind(created_by.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("Failed to list events by creator", e))?;

        rows.into_iter().map(Event::try_from).collect()
    }

    async fn search(&self, term: &str) -> Result<Vec<Event>, DomainError> {
        let rows: Vec<EventRow> = sqlx::query_as(&format!(
            "SELECT {} FROM events \
             WHERE title ILIKE '%' || $1 || '%' \
                OR description ILIKE '%' || $1 || '%' \
                OR location ILIKE '%' || $1 || '%' \
             ORDER BY event_date ASC",
            EVENT_COLUMNS
        ))
        .bind(term)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("Failed to search events", e))?;

        rows.into_iter().map(Event::try_from).collect()
    }
}
