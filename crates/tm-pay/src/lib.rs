pub mod client;
pub mod error;

pub use client::{PaymentIntent, PaymentIntentClient, DEFAULT_AMOUNT_SCALE};
pub use error::{PayError, Result};

#[cfg(test)]
mod tests;
