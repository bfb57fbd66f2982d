//! PostgreSQL implementation of ClubRepository.

use crate::domain::club::{Club, ClubSearch, ClubSort, ClubStatus};
use crate::domain::foundation::{ClubId, DomainError, EmailAddress, ErrorCode, Timestamp};
use crate::ports::ClubRepository;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// PostgreSQL implementation of the ClubRepository port.
pub struct PostgresClubRepository {
    pool: PgPool,
}

impl PostgresClubRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const CLUB_COLUMNS: &str = "id, name, description, category, location, membership_fee, \
                            banner_url, manager_email, status, created_at, updated_at";

/// Database row representation of a club.
#[derive(Debug, sqlx::FromRow)]
struct ClubRow {
    id: Uuid,
    name: String,
    description: String,
    category: String,
    location: String,
    membership_fee: i64,
    banner_url: Option<String>,
    manager_email: String,
    status: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ClubRow> for Club {
    type Error = DomainError;

    fn try_from(row: ClubRow) -> Result<Self, Self::Error> {
        Ok(Club {
            id: ClubId::from_uuid(row.id),
            name: row.name,
            description: row.description,
            category: row.category,
            location: row.location,
            membership_fee: row.membership_fee,
            banner_url: row.banner_url,
            manager_email: EmailAddress::new(row.manager_email).map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Invalid manager_email: {}", e),
                )
            })?,
            status: parse_status(&row.status)?,
            created_at: Timestamp::from_datetime(row.created_at),
            updated_at: Timestamp::from_datetime(row.updated_at),
        })
    }
}

fn parse_status(s: &str) -> Result<ClubStatus, DomainError> {
    match s {
        "pending" => Ok(ClubStatus::Pending),
        "approved" => Ok(ClubStatus::Approved),
        "rejected" => Ok(ClubStatus::Rejected),
        _ => Err(DomainError::new(
            ErrorCode::DatabaseError,
            format!("Invalid club status value: {}", s),
        )),
    }
}

fn status_to_string(status: &ClubStatus) -> &'static str {
    match status {
        ClubStatus::Pending => "pending",
        ClubStatus::Approved => "approved",
        ClubStatus::Rejected => "rejected",
    }
}

fn sort_clause(sort: &ClubSort) -> &'static str {
    match sort {
        ClubSort::Newest => "created_at DESC",
        ClubSort::Oldest => "created_at ASC",
        ClubSort::HighestFee => "membership_fee DESC",
        ClubSort::LowestFee => "membership_fee ASC",
    }
}

/// Directory search statement. Only approved clubs are discoverable;
/// the search term matches the club name case-insensitively and the
/// category filter is a case-insensitive exact match. Both binds are
/// pre-normalized, NULL meaning no filter.
fn search_sql(sort: &ClubSort) -> String {
    format!(
        "SELECT {} FROM clubs \
         WHERE status = 'approved' \
           AND ($1::text IS NULL OR name ILIKE '%' || $1 || '%') \
           AND ($2::text IS NULL OR LOWER(category) = LOWER($2)) \
         ORDER BY {}",
        CLUB_COLUMNS,
        sort_clause(sort)
    )
}

fn db_error(context: &str, e: sqlx::Error) -> DomainError {
    DomainError::new(ErrorCode::DatabaseError, format!("{}: {}", context, e))
}

#[async_trait]
impl ClubRepository for PostgresClubRepository {
    async fn insert(&self, club: &Club) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO clubs (
                id, name, description, category, location, membership_fee,
                banner_url, manager_email, status, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(club.id.as_uuid())
        .bind(&club.name)
        .bind(&club.description)
        .bind(&club.category)
        .bind(&club.location)
        .bind(club.membership_fee)
        .bind(&club.banner_url)
        .bind(club.manager_email.as_str())
        .bind(status_to_string(&club.status))
        .bind(club.created_at.as_datetime())
        .bind(club.updated_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("Failed to insert club", e))?;

        Ok(())
    }

    async fn update(&self, club: &Club) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE clubs SET
                name = $2,
                description = $3,
                category = $4,
                location = $5,
                membership_fee = $6,
                banner_url = $7,
                status = $8,
                updated_at = $9
            WHERE id = $1
            "#,
        )
        .bind(club.id.as_uuid())
        .bind(&club.name)
        .bind(&club.description)
        .bind(&club.category)
        .bind(&club.location)
        .bind(club.membership_fee)
        .bind(&club.banner_url)
        .bind(status_to_string(&club.status))
        .bind(club.updated_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("Failed to update club", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(ErrorCode::ClubNotFound, "Club not found"));
        }

        Ok(())
    }

    async fn delete(&self, id: &ClubId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM clubs WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to delete club", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(ErrorCode::ClubNotFound, "Club not found"));
        }

        Ok(())
    }

    async fn find_by_id(&self, id: &ClubId) -> Result<Option<Club>, DomainError> {
        let row: Option<ClubRow> = sqlx::query_as(&format!(
            "SELECT {} FROM clubs WHERE id = $1",
            CLUB_COLUMNS
        ))
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("Failed to find club", e))?;

        row.map(Club::try_from).transpose()
    }

    async fn list_all(&self) -> Result<Vec<Club>, DomainError> {
        let rows: Vec<ClubRow> = sqlx::query_as(&format!(
            "SELECT {} FROM clubs ORDER BY created_at DESC",
            CLUB_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("Failed to list clubs", e))?;

        rows.into_iter().map(Club::try_from).collect()
    }

    async fn list_approved(&self, limit: Option<i64>) -> Result<Vec<Club>, DomainError> {
        let rows: Vec<ClubRow> = match limit {
            Some(limit) => {
                sqlx::query_as(&format!(
                    "SELECT {} FROM clubs WHERE status = 'approved' \
                     ORDER BY created_at DESC LIMIT $1",
                    CLUB_COLUMNS
                ))
                .bind(limit)
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as(&format!(
                    "SELECT {} FROM clubs WHERE status = 'approved' \
                     ORDER BY created_at DESC",
                    CLUB_COLUMNS
                ))
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(|e| db_error("Failed to list approved clubs", e))?;

        rows.into_iter().map(Club::try_from).collect()
    }

    async fn list_by_manager(
        &self,
        manager_email: &EmailAddress,
    ) -> Result<Vec<Club>, DomainError> {
        let rows: Vec<ClubRow> = sqlx::query_as(&format!(
            "SELECT {} FROM clubs WHERE manager_email = $1 ORDER BY created_at DESC",
            CLUB_COLUMNS
        ))
        .bind(manager_email.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("Failed to list clubs by manager", e))?;

        rows.into_iter().map(Club::try_from).collect()
    }

    async fn search(&self, query: &ClubSearch) -> Result<Vec<Club>, DomainError> {
        let rows: Vec<ClubRow> = sqlx::query_as(&search_sql(&query.sort))
            .bind(query.term())
            .bind(query.category_filter())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("Failed to search clubs", e))?;

        rows.into_iter().map(Club::try_from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_status_works_for_all_values() {
        assert_eq!(parse_status("pending").unwrap(), ClubStatus::Pending);
        assert_eq!(parse_status("approved").unwrap(), ClubStatus::Approved);
        assert_eq!(parse_status("rejected").unwrap(), ClubStatus::Rejected);
    }

    #[test]
    fn parse_status_rejects_invalid_values() {
        assert!(parse_status("archived").is_err());
        assert!(parse_status("").is_err());
    }

    #[test]
    fn roundtrip_status_conversion() {
        for status in [ClubStatus::Pending, ClubStatus::Approved, ClubStatus::Rejected] {
            let s = status_to_string(&status);
            assert_eq!(parse_status(s).unwrap(), status);
        }
    }

    #[test]
    fn search_matches_category_regardless_of_case() {
        let sql = search_sql(&ClubSort::Newest);
        assert!(sql.contains("LOWER(category) = LOWER($2)"));
    }

    #[test]
    fn search_matches_the_club_name_only() {
        let sql = search_sql(&ClubSort::Newest);
        let filters = sql.split_once("WHERE").unwrap().1;
        assert!(filters.contains("name ILIKE"));
        assert!(!filters.contains("description"));
        assert!(!filters.contains("location"));
    }

    #[test]
    fn search_orders_by_the_requested_sort() {
        assert!(search_sql(&ClubSort::Oldest).ends_with("ORDER BY created_at ASC"));
        assert!(search_sql(&ClubSort::LowestFee).ends_with("ORDER BY membership_fee ASC"));
    }

    #[test]
    fn sort_clause_orders_each_variant() {
        assert_eq!(sort_clause(&ClubSort::Newest), "created_at DESC");
        assert_eq!(sort_clause(&ClubSort::Oldest), "created_at ASC");
        assert_eq!(sort_clause(&ClubSort::HighestFee), "membership_fee DESC");
        assert_eq!(sort_clause(&ClubSort::LowestFee), "membership_fee ASC");
    }
}
