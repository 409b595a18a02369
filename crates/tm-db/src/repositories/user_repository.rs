use crate::{DbError, Result as DbErrorResult};

use tm_core::{Role, UserAccount};

use std::str::FromStr;

use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Sign-in upsert. Creates the account with the `customer` role on first
    /// sight; later calls refresh name and profile but never touch the role.
    pub async fn upsert(
        &self,
        email: &str,
        name: Option<&str>,
        profile: &serde_json::Value,
    ) -> DbErrorResult<u64> {
        let profile_json = if profile.is_null() {
            None
        } else {
            Some(profile.to_string())
        };

        let result = sqlx::query(
            r#"
              INSERT INTO tm_users (email, role, name, profile, created_at)
              VALUES (?, 'customer', ?, ?, ?)
              ON CONFLICT(email) DO UPDATE SET
                  name = excluded.name,
                  profile = excluded.profile
              "#,
        )
        .bind(email)
        .bind(name)
        .bind(profile_json)
        .bind(Utc::now().timestamp())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    pub async fn find_by_email(&self, email: &str) -> DbErrorResult<Option<UserAccount>> {
        let row = sqlx::query(
            r#"
              SELECT email, role, name, profile, created_at
              FROM tm_users
              WHERE email = ?
              "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        row.map(row_to_user).transpose()
    }

    pub async fn find_all(&self) -> DbErrorResult<Vec<UserAccount>> {
        let rows = sqlx::query(
            r#"
              SELECT email, role, name, profile, created_at
              FROM tm_users
              ORDER BY created_at ASC
              "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(row_to_user).collect()
    }

    pub async fn update_profile(
        &self,
        email: &str,
        name: Option<&str>,
        profile: &serde_json::Value,
    ) -> DbErrorResult<u64> {
        let profile_json = if profile.is_null() {
            None
        } else {
            Some(profile.to_string())
        };

        let result = sqlx::query(
            r#"
              UPDATE tm_users
              SET name = COALESCE(?, name), profile = COALESCE(?, profile)
              WHERE email = ?
              "#,
        )
        .bind(name)
        .bind(profile_json)
        .bind(email)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    pub async fn set_role(&self, email: &str, role: Role) -> DbErrorResult<u64> {
        let result = sqlx::query("UPDATE tm_users SET role = ? WHERE email = ?")
            .bind(role.as_str())
            .bind(email)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}

fn row_to_user(row: SqliteRow) -> DbErrorResult<UserAccount> {
    let role: String = row.try_get("role")?;
    let profile: Option<String> = row.try_get("profile")?;
    let created_at: i64 = row.try_get("created_at")?;

    Ok(UserAccount {
        email: row.try_get("email")?,
        role: Role::from_str(&role).map_err(|e| DbError::decode(e.to_string()))?,
        name: row.try_get("name")?,
        profile: match profile {
            Some(json) => serde_json::from_str(&json)
                .map_err(|e| DbError::decode(format!("user profile: {e}")))?,
            None => serde_json::Value::Null,
        },
        created_at: DateTime::from_timestamp(created_at, 0)
            .ok_or_else(|| DbError::decode("user created_at out of range"))?,
    })
}
