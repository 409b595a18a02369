use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateIntentRequest {
    pub price: f64,
}
