use crate::{DbError, Result as DbErrorResult};

use tm_core::{OutboxStatus, PaymentOutboxEntry};

use std::str::FromStr;

use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

/// Intent log for the confirm-payment dual write. Entries are created
/// pending before the order mutation and flipped to complete once the
/// payment record is durably inserted.
pub struct PaymentOutboxRepository {
    pool: SqlitePool,
}

impl PaymentOutboxRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, entry: &PaymentOutboxEntry) -> DbErrorResult<()> {
        sqlx::query(
            r#"
              INSERT INTO tm_payment_outbox (
                  id, order_id, transaction_id, email, amount, status, created_at, completed_at
              ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
              "#,
        )
        .bind(entry.id.to_string())
        .bind(entry.order_id.to_string())
        .bind(&entry.transaction_id)
        .bind(&entry.email)
        .bind(entry.amount)
        .bind(entry.status.as_str())
        .bind(entry.created_at.timestamp())
        .bind(entry.completed_at.map(|dt| dt.timestamp()))
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn mark_complete(&self, id: Uuid) -> DbErrorResult<u64> {
        let result = sqlx::query(
            r#"
              UPDATE tm_payment_outbox
              SET status = 'complete', completed_at = ?
              WHERE id = ? AND status = 'pending'
              "#,
        )
        .bind(Utc::now().timestamp())
        .bind(id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Pending entries created before `older_than`, oldest first. The age
    /// cutoff keeps the sweep off entries still inside an in-flight request.
    pub async fn find_pending(
        &self,
        older_than: DateTime<Utc>,
    ) -> DbErrorResult<Vec<PaymentOutboxEntry>> {
        let rows = sqlx::query(
            r#"
              SELECT id, order_id, transaction_id, email, amount, status, created_at, completed_at
              FROM tm_payment_outbox
              WHERE status = 'pending' AND created_at < ?
              ORDER BY created_at ASC
              "#,
        )
        .bind(older_than.timestamp())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(row_to_entry).collect()
    }
}

fn row_to_entry(row: SqliteRow) -> DbErrorResult<PaymentOutboxEntry> {
    let id: String = row.try_get("id")?;
    let order_id: String = row.try_get("order_id")?;
    let status: String = row.try_get("status")?;
    let created_at: i64 = row.try_get("created_at")?;
    let completed_at: Option<i64> = row.try_get("completed_at")?;

    Ok(PaymentOutboxEntry {
        id: Uuid::parse_str(&id).map_err(|e| DbError::decode(format!("outbox id: {e}")))?,
        order_id: Uuid::parse_str(&order_id)
            .map_err(|e| DbError::decode(format!("outbox order_id: {e}")))?,
        transaction_id: row.try_get("transaction_id")?,
        email: row.try_get("email")?,
        amount: row.try_get("amount")?,
        status: OutboxStatus::from_str(&status).map_err(|e| DbError::decode(e.to_string()))?,
        created_at: DateTime::from_timestamp(created_at, 0)
            .ok_or_else(|| DbError::decode("outbox created_at out of range"))?,
        completed_at: completed_at.and_then(|ts| DateTime::from_timestamp(ts, 0)),
    })
}
