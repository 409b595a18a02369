use crate::{DbError, Result as DbErrorResult};

use tm_core::Review;

use chrono::DateTime;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

pub struct ReviewRepository {
    pool: SqlitePool,
}

impl ReviewRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, review: &Review) -> DbErrorResult<()> {
        sqlx::query(
            r#"
              INSERT INTO tm_reviews (id, email, name, content, rating, created_at)
              VALUES (?, ?, ?, ?, ?, ?)
              "#,
        )
        .bind(review.id.to_string())
        .bind(&review.email)
        .bind(review.name.as_deref())
        .bind(&review.content)
        .bind(review.rating)
        .bind(review.created_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_all(&self) -> DbErrorResult<Vec<Review>> {
        let rows = sqlx::query(
            r#"
              SELECT id, email, name, content, rating, created_at
              FROM tm_reviews
              ORDER BY created_at DESC
              "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(row_to_review).collect()
    }
}

fn row_to_review(row: SqliteRow) -> DbErrorResult<Review> {
    let id: String = row.try_get("id")?;
    let created_at: i64 = row.try_get("created_at")?;

    Ok(Review {
        id: Uuid::parse_str(&id).map_err(|e| DbError::decode(format!("review id: {e}")))?,
        email: row.try_get("email")?,
        name: row.try_get("name")?,
        content: row.try_get("content")?,
        rating: row.try_get("rating")?,
        created_at: DateTime::from_timestamp(created_at, 0)
            .ok_or_else(|| DbError::decode("review created_at out of range"))?,
    })
}
