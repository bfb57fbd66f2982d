//! PostgreSQL implementation of UserRepository.

use std::str::FromStr;

use crate::domain::foundation::{DomainError, EmailAddress, ErrorCode, Timestamp, UserRecordId};
use crate::domain::user::{Role, User};
use crate::ports::{UpsertOutcome, UserRepository};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// PostgreSQL implementation of the UserRepository port.
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row representation of a user.
#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id: Uuid,
    email: String,
    display_name: Option<String>,
    role: String,
    created_at: DateTime<Utc>,
}

/// Upsert row carrying the inserted-vs-updated flag.
#[derive(Debug, sqlx::FromRow)]
struct UpsertRow {
    id: Uuid,
    email: String,
    display_name: Option<String>,
    role: String,
    created_at: DateTime<Utc>,
    inserted: bool,
}

impl TryFrom<UserRow> for User {
    type Error = DomainError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(User {
            id: UserRecordId::from_uuid(row.id),
            email: EmailAddress::new(row.email).map_err(|e| {
                DomainError::new(ErrorCode::DatabaseError, format!("Invalid email: {}", e))
            })?,
            display_name: row.display_name,
            role: parse_role(&row.role)?,
            created_at: Timestamp::from_datetime(row.created_at),
        })
    }
}

fn parse_role(s: &str) -> Result<Role, DomainError> {
    Role::from_str(s).map_err(|_| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Invalid role value: {}", s),
        )
    })
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn upsert(&self, user: &User) -> Result<UpsertOutcome, DomainError> {
        // xmax = 0 only on freshly inserted rows, which distinguishes
        // first sign-in from a repeat. The stored role is never touched.
        let row: UpsertRow = sqlx::query_as(
            r#"
            INSERT INTO users (id, email, display_name, role, created_at)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (email) DO UPDATE
                SET display_name = COALESCE(EXCLUDED.display_name, users.display_name)
            RETURNING id, email, display_name, role, created_at, (xmax = 0) AS inserted
            "#,
        )
        .bind(user.id.as_uuid())
        .bind(user.email.as_str())
        .bind(&user.display_name)
        .bind(user.role.as_str())
        .bind(user.created_at.as_datetime())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to upsert user: {}", e),
            )
        })?;

        let inserted = row.inserted;
        let user = User::try_from(UserRow {
            id: row.id,
            email: row.email,
            display_name: row.display_name,
            role: row.role,
            created_at: row.created_at,
        })?;

        Ok(UpsertOutcome { user, inserted })
    }

    async fn find_by_id(&self, id: &UserRecordId) -> Result<Option<User>, DomainError> {
        let row: Option<UserRow> = sqlx::query_as(
            r#"
            SELECT id, email, display_name, role, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to find user: {}", e),
            )
        })?;

        row.map(User::try_from).transpose()
    }

    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, DomainError> {
        let row: Option<UserRow> = sqlx::query_as(
            r#"
            SELECT id, email, display_name, role, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to find user: {}", e),
            )
        })?;

        row.map(User::try_from).transpose()
    }

    async fn list_all(&self) -> Result<Vec<User>, DomainError> {
        let rows: Vec<UserRow> = sqlx::query_as(
            r#"
            SELECT id, email, display_name, role, created_at
            FROM users
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to list users: {}", e),
            )
        })?;

        rows.into_iter().map(User::try_from).collect()
    }

    async fn set_role(&self, id: &UserRecordId, role: Role) -> Result<(), DomainError> {
        let result = sqlx::query("UPDATE users SET role = $2 WHERE id = $1")
            .bind(id.as_uuid())
            .bind(role.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to set role: {}", e),
                )
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(ErrorCode::UserNotFound, "User not found"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_role_works_for_all_values() {
        assert_eq!(parse_role("member").unwrap(), Role::Member);
        assert_eq!(parse_role("manager").unwrap(), Role::Manager);
        assert_eq!(parse_role("admin").unwrap(), Role::Admin);
    }

    #[test]
    fn parse_role_rejects_invalid_values() {
        assert!(parse_role("superuser").is_err());
        assert!(parse_role("").is_err());
    }
}
