use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateToolRequest {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub min_order_qty: i64,
    pub available_qty: i64,
}
