use tm_auth::TokenService;
use tm_pay::PaymentIntentClient;

use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared application state for all request handlers.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub tokens: Arc<TokenService>,
    pub payments: Arc<PaymentIntentClient>,
}
