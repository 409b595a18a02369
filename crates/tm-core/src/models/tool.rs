use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tool {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: f64,
    /// Smallest quantity a single order may carry.
    pub min_order_qty: i64,
    pub available_qty: i64,
    pub created_at: DateTime<Utc>,
}

impl Tool {
    pub fn new(
        name: String,
        description: String,
        price: f64,
        min_order_qty: i64,
        available_qty: i64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            description,
            price,
            min_order_qty,
            available_qty,
            created_at: Utc::now(),
        }
    }
}
