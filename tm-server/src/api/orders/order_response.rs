use crate::OrderDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct OrderResponse {
    pub order: OrderDto,
}
