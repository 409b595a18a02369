use tm_core::Order;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct OrderDto {
    pub id: String,
    pub email: String,
    pub tool_id: String,
    pub quantity: i64,
    pub price: f64,
    pub state: String,
    /// Flags derived from `state`, kept for clients that read the old shape.
    pub paid: bool,
    pub shipping: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
    pub created_at: i64,
}

impl From<Order> for OrderDto {
    fn from(o: Order) -> Self {
        Self {
            id: o.id.to_string(),
            email: o.email,
            tool_id: o.tool_id.to_string(),
            quantity: o.quantity,
            price: o.price,
            state: o.state.as_str().to_string(),
            paid: o.state.is_paid(),
            shipping: o.state.is_shipping(),
            transaction_id: o.transaction_id,
            created_at: o.created_at.timestamp(),
        }
    }
}
