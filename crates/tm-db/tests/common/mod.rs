#![allow(dead_code)]

//! Shared test infrastructure for tm-db repository tests

use sqlx::SqlitePool;
use uuid::Uuid;

use tm_core::Order;

/// Create a test pool with in-memory SQLite and the full schema applied.
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePool::connect(":memory:")
        .await
        .expect("Failed to create test database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

pub fn placed_order(email: &str) -> Order {
    Order::new(email.to_string(), Uuid::new_v4(), 2, 50.0)
}
