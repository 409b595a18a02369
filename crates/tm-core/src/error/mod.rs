pub mod error_location;

// -------------------------------------------------------------------------- //

use crate::models::order_state::OrderState;
use crate::ErrorLocation;

use std::result::Result as StdResult;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid role: {value} {location}")]
    InvalidRole {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid order state: {value} {location}")]
    InvalidOrderState {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid outbox status: {value} {location}")]
    InvalidOutboxStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid order transition: {from:?} -> {to:?} {location}")]
    InvalidTransition {
        from: OrderState,
        to: OrderState,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
