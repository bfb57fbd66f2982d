//! PostgreSQL implementation of PaymentRepository.

use crate::domain::foundation::{ClubId, DomainError, EmailAddress, ErrorCode, PaymentId, Timestamp};
use crate::domain::payment::Payment;
use crate::ports::PaymentRepository;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// PostgreSQL implementation of the PaymentRepository port.
///
/// The `payments_club_member_idx` unique index makes reconciliation
/// idempotent: a second payment for the same (club, member) pair is
/// rejected with `PaymentExists`.
pub struct PostgresPaymentRepository {
    pool: PgPool,
}

impl PostgresPaymentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const PAYMENT_COLUMNS: &str =
    "id, club_id, member_email, transaction_ref, amount, club_name, club_category, created_at";

/// Database row representation of a payment record.
#[derive(Debug, sqlx::FromRow)]
struct PaymentRow {
    id: Uuid,
    club_id: Uuid,
    member_email: String,
    transaction_ref: String,
    amount: i64,
    club_name: String,
    club_category: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<PaymentRow> for Payment {
    type Error = DomainError;

    fn try_from(row: PaymentRow) -> Result<Self, Self::Error> {
        Ok(Payment {
            id: PaymentId::from_uuid(row.id),
            club_id: ClubId::from_uuid(row.club_id),
            member_email: EmailAddress::new(row.member_email).map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Invalid member_email: {}", e),
                )
            })?,
            transaction_ref: row.transaction_ref,
            amount: row.amount,
            club_name: row.club_name,
            club_category: row.club_category,
            created_at: Timestamp::from_datetime(row.created_at),
        })
    }
}

fn db_error(context: &str, e: sqlx::Error) -> DomainError {
    DomainError::new(ErrorCode::DatabaseError, format!("{}: {}", context, e))
}

#[async_trait]
impl PaymentRepository for PostgresPaymentRepository {
    async fn insert(&self, payment: &Payment) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO payments (
                id, club_id, member_email, transaction_ref, amount,
                club_name, club_category, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(payment.id.as_uuid())
        .bind(payment.club_id.as_uuid())
        .bind(payment.member_email.as_str())
        .bind(&payment.transaction_ref)
        .bind(payment.amount)
        .bind(&payment.club_name)
        .bind(&payment.club_category)
        .bind(payment.created_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.constraint() == Some("payments_club_member_idx") {
                    return DomainError::new(
                        ErrorCode::PaymentExists,
                        "Payment already recorded for this club and member",
                    );
                }
            }
            db_error("Failed to insert payment", e)
        })?;

        Ok(())
    }

    async fn find_by_club_and_member(
        &self,
        club_id: &ClubId,
        member_email: &EmailAddress,
    ) -> Result<Option<Payment>, DomainError> {
        let row: Option<PaymentRow> = sqlx::query_as(&format!(
            "SELECT {} FROM payments WHERE club_id = $1 AND member_email = $2",
            PAYMENT_COLUMNS
        ))
        .bind(club_id.as_uuid())
        .bind(member_email.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("Failed to find payment", e))?;

        row.map(Payment::try_from).transpose()
    }

    async fn list_all(&self) -> Result<Vec<Payment>, DomainError> {
        let rows: Vec<PaymentRow> = sqlx::query_as(&format!(
            "SELECT {} FROM payments ORDER BY created_at DESC",
            PAYMENT_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("Failed to list payments", e))?;

        rows.into_iter().map(Payment::try_from).collect()
    }

    async fn list_by_member(
        &self,
        member_email: &EmailAddress,
    ) -> Result<Vec<Payment>, DomainError> {
        let rows: Vec<PaymentRow> = sqlx::query_as(&format!(
            "SELECT {} FROM payments WHERE member_email = $1 ORDER BY created_at DESC",
            PAYMENT_COLUMNS
        ))
        .bind(member_email.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("Failed to list payments by member", e))?;

        rows.into_iter().map(Payment::try_from).collect()
    }
}
