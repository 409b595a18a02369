use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateReviewRequest {
    pub name: Option<String>,
    pub content: String,
    pub rating: i64,
}
