use tm_core::ErrorLocation;

use std::panic::Location;

use thiserror::Error;

/// Errors from the payment-intent provider bridge. Never swallowed; the
/// request boundary surfaces them and leaves order state untouched.
#[derive(Error, Debug)]
pub enum PayError {
    #[error("Invalid amount: {price} {location}")]
    InvalidAmount { price: f64, location: ErrorLocation },

    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("Payment provider rejected the request: {message} (status: {status}) {location}")]
    Provider {
        status: u16,
        message: String,
        location: ErrorLocation,
    },

    #[error("Malformed provider response: {message} {location}")]
    MalformedResponse {
        message: String,
        location: ErrorLocation,
    },
}

impl From<reqwest::Error> for PayError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        PayError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }
}

pub type Result<T> = std::result::Result<T, PayError>;
