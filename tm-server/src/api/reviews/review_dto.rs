use tm_core::Review;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ReviewDto {
    pub id: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub content: String,
    pub rating: i64,
    pub created_at: i64,
}

impl From<Review> for ReviewDto {
    fn from(r: Review) -> Self {
        Self {
            id: r.id.to_string(),
            email: r.email,
            name: r.name,
            content: r.content,
            rating: r.rating,
            created_at: r.created_at.timestamp(),
        }
    }
}
