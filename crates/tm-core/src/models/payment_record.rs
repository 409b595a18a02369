use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Append-only record of a confirmed payment, keyed by the provider's
/// transaction id. Exactly one order links to each record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentRecord {
    pub transaction_id: String,
    pub order_id: Uuid,
    pub email: String,
    pub amount: f64,
    pub created_at: DateTime<Utc>,
}

impl PaymentRecord {
    pub fn new(transaction_id: String, order_id: Uuid, email: String, amount: f64) -> Self {
        Self {
            transaction_id,
            order_id,
            email,
            amount,
            created_at: Utc::now(),
        }
    }
}
