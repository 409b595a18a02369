use crate::{CoreError, ErrorLocation, Result};

use std::panic::Location;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Order lifecycle state.
///
/// The source system encoded this as two independent booleans (`paid`,
/// `shipping`); here the state is a single tag and every edge goes through
/// the transition methods on `Order`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderState {
    Placed,
    Paid,
    Shipped,
}

impl OrderState {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderState::Placed => "placed",
            OrderState::Paid => "paid",
            OrderState::Shipped => "shipped",
        }
    }

    /// Payment has been confirmed (shipped orders were necessarily paid).
    pub fn is_paid(&self) -> bool {
        matches!(self, OrderState::Paid | OrderState::Shipped)
    }

    pub fn is_shipping(&self) -> bool {
        matches!(self, OrderState::Shipped)
    }
}

impl FromStr for OrderState {
    type Err = CoreError;

    #[track_caller]
    fn from_str(value: &str) -> Result<Self> {
        match value {
            "placed" => Ok(OrderState::Placed),
            "paid" => Ok(OrderState::Paid),
            "shipped" => Ok(OrderState::Shipped),
            _ => Err(CoreError::InvalidOrderState {
                value: value.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
