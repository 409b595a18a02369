use tm_core::Tool;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ToolDto {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub min_order_qty: i64,
    pub available_qty: i64,
    pub created_at: i64,
}

impl From<Tool> for ToolDto {
    fn from(t: Tool) -> Self {
        Self {
            id: t.id.to_string(),
            name: t.name,
            description: t.description,
            price: t.price,
            min_order_qty: t.min_order_qty,
            available_qty: t.available_qty,
            created_at: t.created_at.timestamp(),
        }
    }
}
