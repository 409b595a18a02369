use crate::models::outbox_status::OutboxStatus;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Intent log for the confirm-payment dual write.
///
/// Written `Pending` before the order is updated and marked `Complete`
/// only after both the order update and the payment-record insert landed.
/// The reconciliation sweep finishes entries left pending by a partial
/// failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentOutboxEntry {
    pub id: Uuid,
    pub order_id: Uuid,
    pub transaction_id: String,
    pub email: String,
    pub amount: f64,
    pub status: OutboxStatus,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl PaymentOutboxEntry {
    pub fn new(order_id: Uuid, transaction_id: String, email: String, amount: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            order_id,
            transaction_id,
            email,
            amount,
            status: OutboxStatus::Pending,
            created_at: Utc::now(),
            completed_at: None,
        }
    }
}
