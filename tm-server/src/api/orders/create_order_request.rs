use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateOrderRequest {
    pub tool_id: String,
    pub quantity: i64,
    pub price: f64,
}
