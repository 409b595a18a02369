use crate::{DbError, Result as DbErrorResult};

use tm_core::{Order, OrderState};

use std::str::FromStr;

use chrono::DateTime;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

/// Orders collection. State-changing updates are conditioned on the row's
/// current state so two racing requests cannot skip a lifecycle edge; a
/// 0-row outcome means the order was gone (or already past that edge) and
/// is reported as a count, not an error.
pub struct OrderRepository {
    pool: SqlitePool,
}

impl OrderRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, order: &Order) -> DbErrorResult<()> {
        sqlx::query(
            r#"
              INSERT INTO tm_orders (
                  id, email, tool_id, quantity, price, state, transaction_id, created_at
              ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
              "#,
        )
        .bind(order.id.to_string())
        .bind(&order.email)
        .bind(order.tool_id.to_string())
        .bind(order.quantity)
        .bind(order.price)
        .bind(order.state.as_str())
        .bind(order.transaction_id.as_deref())
        .bind(order.created_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Order>> {
        let row = sqlx::query(
            r#"
              SELECT id, email, tool_id, quantity, price, state, transaction_id, created_at
              FROM tm_orders
              WHERE id = ?
              "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(row_to_order).transpose()
    }

    pub async fn find_by_email(&self, email: &str) -> DbErrorResult<Vec<Order>> {
        let rows = sqlx::query(
            r#"
              SELECT id, email, tool_id, quantity, price, state, transaction_id, created_at
              FROM tm_orders
              WHERE email = ?
              ORDER BY created_at ASC
              "#,
        )
        .bind(email)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(row_to_order).collect()
    }

    pub async fn find_all(&self) -> DbErrorResult<Vec<Order>> {
        let rows = sqlx::query(
            r#"
              SELECT id, email, tool_id, quantity, price, state, transaction_id, created_at
              FROM tm_orders
              ORDER BY created_at ASC
              "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(row_to_order).collect()
    }

    /// Placed -> Paid, recording the transaction id with the state change.
    pub async fn mark_paid(&self, id: Uuid, transaction_id: &str) -> DbErrorResult<u64> {
        let result = sqlx::query(
            r#"
              UPDATE tm_orders
              SET state = 'paid', transaction_id = ?
              WHERE id = ? AND state = 'placed'
              "#,
        )
        .bind(transaction_id)
        .bind(id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Paid -> Shipped. Matching an already-shipped row keeps the call
    /// idempotent; a placed row never matches.
    pub async fn mark_shipped(&self, id: Uuid) -> DbErrorResult<u64> {
        let result = sqlx::query(
            r#"
              UPDATE tm_orders
              SET state = 'shipped'
              WHERE id = ? AND state IN ('paid', 'shipped')
              "#,
        )
        .bind(id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Owner cancellation: only removes the row while it is still placed.
    pub async fn delete_if_placed(&self, id: Uuid) -> DbErrorResult<u64> {
        let result = sqlx::query("DELETE FROM tm_orders WHERE id = ? AND state = 'placed'")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Admin purge: removes the row regardless of state.
    pub async fn delete(&self, id: Uuid) -> DbErrorResult<u64> {
        let result = sqlx::query("DELETE FROM tm_orders WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}

fn row_to_order(row: SqliteRow) -> DbErrorResult<Order> {
    let id: String = row.try_get("id")?;
    let tool_id: String = row.try_get("tool_id")?;
    let state: String = row.try_get("state")?;
    let created_at: i64 = row.try_get("created_at")?;

    Ok(Order {
        id: Uuid::parse_str(&id).map_err(|e| DbError::decode(format!("order id: {e}")))?,
        email: row.try_get("email")?,
        tool_id: Uuid::parse_str(&tool_id)
            .map_err(|e| DbError::decode(format!("order tool_id: {e}")))?,
        quantity: row.try_get("quantity")?,
        price: row.try_get("price")?,
        state: OrderState::from_str(&state).map_err(|e| DbError::decode(e.to_string()))?,
        transaction_id: row.try_get("transaction_id")?,
        created_at: DateTime::from_timestamp(created_at, 0)
            .ok_or_else(|| DbError::decode("order created_at out of range"))?,
    })
}
