use crate::{DbError, Result as DbErrorResult};

use tm_core::PaymentRecord;

use chrono::DateTime;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

/// Append-only payments collection, keyed by transaction id.
pub struct PaymentRepository {
    pool: SqlitePool,
}

impl PaymentRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Idempotent insert: a replay of the same transaction id is a 0-row
    /// no-op, which lets the reconciliation sweep retry blindly.
    pub async fn insert(&self, record: &PaymentRecord) -> DbErrorResult<u64> {
        let result = sqlx::query(
            r#"
              INSERT OR IGNORE INTO tm_payments (
                  transaction_id, order_id, email, amount, created_at
              ) VALUES (?, ?, ?, ?, ?)
              "#,
        )
        .bind(&record.transaction_id)
        .bind(record.order_id.to_string())
        .bind(&record.email)
        .bind(record.amount)
        .bind(record.created_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    pub async fn find_by_transaction_id(
        &self,
        transaction_id: &str,
    ) -> DbErrorResult<Option<PaymentRecord>> {
        let row = sqlx::query(
            r#"
              SELECT transaction_id, order_id, email, amount, created_at
              FROM tm_payments
              WHERE transaction_id = ?
              "#,
        )
        .bind(transaction_id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(row_to_payment).transpose()
    }

    pub async fn find_by_order_id(&self, order_id: Uuid) -> DbErrorResult<Vec<PaymentRecord>> {
        let rows = sqlx::query(
            r#"
              SELECT transaction_id, order_id, email, amount, created_at
              FROM tm_payments
              WHERE order_id = ?
              "#,
        )
        .bind(order_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(row_to_payment).collect()
    }
}

fn row_to_payment(row: SqliteRow) -> DbErrorResult<PaymentRecord> {
    let order_id: String = row.try_get("order_id")?;
    let created_at: i64 = row.try_get("created_at")?;

    Ok(PaymentRecord {
        transaction_id: row.try_get("transaction_id")?,
        order_id: Uuid::parse_str(&order_id)
            .map_err(|e| DbError::decode(format!("payment order_id: {e}")))?,
        email: row.try_get("email")?,
        amount: row.try_get("amount")?,
        created_at: DateTime::from_timestamp(created_at, 0)
            .ok_or_else(|| DbError::decode("payment created_at out of range"))?,
    })
}
