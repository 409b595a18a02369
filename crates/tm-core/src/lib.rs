pub mod error;
pub mod models;

pub use error::error_location::ErrorLocation;
pub use error::{CoreError, Result};
pub use models::order::Order;
pub use models::order_state::OrderState;
pub use models::outbox_status::OutboxStatus;
pub use models::payment_outbox_entry::PaymentOutboxEntry;
pub use models::payment_record::PaymentRecord;
pub use models::review::Review;
pub use models::role::Role;
pub use models::tool::Tool;
pub use models::user_account::UserAccount;

#[cfg(test)]
mod tests;
