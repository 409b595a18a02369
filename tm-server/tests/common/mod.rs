#![allow(dead_code)]

//! Test infrastructure for tm-server API tests

use tm_auth::TokenService;
use tm_core::{Order, Tool};
use tm_db::{OrderRepository, ToolRepository};
use tm_pay::{PaymentIntentClient, DEFAULT_AMOUNT_SCALE};
use tm_server::AppState;

use std::sync::Arc;

use sqlx::SqlitePool;
use uuid::Uuid;

pub const TEST_SECRET: &[u8] = b"test-signing-secret";

/// Create a test pool with in-memory SQLite and the full schema applied.
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePool::connect(":memory:")
        .await
        .expect("Failed to create test database");

    sqlx::migrate!("../crates/tm-db/migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Create AppState for testing. The payment bridge points at an unroutable
/// address; tests that exercise it swap in a mock server URL.
pub async fn create_test_app_state() -> AppState {
    create_test_app_state_with_provider("http://127.0.0.1:9").await
}

pub async fn create_test_app_state_with_provider(payment_base_url: &str) -> AppState {
    let pool = create_test_pool().await;

    AppState {
        pool,
        tokens: Arc::new(TokenService::with_hs256(TEST_SECRET)),
        payments: Arc::new(PaymentIntentClient::new(
            payment_base_url,
            "sk_test_secret",
            "usd",
            DEFAULT_AMOUNT_SCALE,
        )),
    }
}

/// Create a user row with the given role.
pub async fn create_test_user(pool: &SqlitePool, email: &str, role: &str) {
    sqlx::query("INSERT INTO tm_users (email, role, created_at) VALUES (?, ?, ?)")
        .bind(email)
        .bind(role)
        .bind(chrono::Utc::now().timestamp())
        .execute(pool)
        .await
        .expect("Failed to create test user");
}

/// Authorization header value for `email`.
pub fn bearer(state: &AppState, email: &str) -> String {
    let token = state.tokens.issue(email).expect("Failed to issue token");
    format!("Bearer {}", token)
}

pub async fn create_test_tool(pool: &SqlitePool) -> Uuid {
    let tool = Tool::new("Impact Driver".to_string(), "18V".to_string(), 50.0, 1, 40);
    ToolRepository::new(pool.clone())
        .create(&tool)
        .await
        .expect("Failed to create test tool");
    tool.id
}

pub async fn create_test_order(pool: &SqlitePool, email: &str, tool_id: Uuid) -> Uuid {
    let order = Order::new(email.to_string(), tool_id, 2, 50.0);
    OrderRepository::new(pool.clone())
        .create(&order)
        .await
        .expect("Failed to create test order");
    order.id
}

pub async fn count_rows(pool: &SqlitePool, table: &str) -> i64 {
    let sql = format!("SELECT COUNT(*) AS n FROM {}", table);
    let row: (i64,) = sqlx::query_as(&sql)
        .fetch_one(pool)
        .await
        .expect("Failed to count rows");
    row.0
}
