use crate::OrderDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct OrderListResponse {
    pub orders: Vec<OrderDto>,
}
