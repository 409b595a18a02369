use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub id: Uuid,
    pub email: String,
    pub name: Option<String>,
    pub content: String,
    pub rating: i64,
    pub created_at: DateTime<Utc>,
}

impl Review {
    pub fn new(email: String, name: Option<String>, content: String, rating: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            email,
            name,
            content,
            rating,
            created_at: Utc::now(),
        }
    }
}
