use crate::{DbError, Result as DbErrorResult};

use tm_core::Tool;

use chrono::DateTime;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

pub struct ToolRepository {
    pool: SqlitePool,
}

impl ToolRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, tool: &Tool) -> DbErrorResult<()> {
        sqlx::query(
            r#"
              INSERT INTO tm_tools (
                  id, name, description, price, min_order_qty, available_qty, created_at
              ) VALUES (?, ?, ?, ?, ?, ?, ?)
              "#,
        )
        .bind(tool.id.to_string())
        .bind(&tool.name)
        .bind(&tool.description)
        .bind(tool.price)
        .bind(tool.min_order_qty)
        .bind(tool.available_qty)
        .bind(tool.created_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Tool>> {
        let row = sqlx::query(
            r#"
              SELECT id, name, description, price, min_order_qty, available_qty, created_at
              FROM tm_tools
              WHERE id = ?
              "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(row_to_tool).transpose()
    }

    pub async fn find_all(&self) -> DbErrorResult<Vec<Tool>> {
        let rows = sqlx::query(
            r#"
              SELECT id, name, description, price, min_order_qty, available_qty, created_at
              FROM tm_tools
              ORDER BY created_at ASC
              "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(row_to_tool).collect()
    }

    /// Deleting an absent tool is a benign no-op; the caller reads the count.
    pub async fn delete(&self, id: Uuid) -> DbErrorResult<u64> {
        let result = sqlx::query("DELETE FROM tm_tools WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}

fn row_to_tool(row: SqliteRow) -> DbErrorResult<Tool> {
    let id: String = row.try_get("id")?;
    let created_at: i64 = row.try_get("created_at")?;

    Ok(Tool {
        id: Uuid::parse_str(&id).map_err(|e| DbError::decode(format!("tool id: {e}")))?,
        name: row.try_get("name")?,
        description: row.try_get("description")?,
        price: row.try_get("price")?,
        min_order_qty: row.try_get("min_order_qty")?,
        available_qty: row.try_get("available_qty")?,
        created_at: DateTime::from_timestamp(created_at, 0)
            .ok_or_else(|| DbError::decode("tool created_at out of range"))?,
    })
}
