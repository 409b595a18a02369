pub mod error;
pub mod repositories;

pub use error::{DbError, Result};
pub use repositories::order_repository::OrderRepository;
pub use repositories::payment_outbox_repository::PaymentOutboxRepository;
pub use repositories::payment_repository::PaymentRepository;
pub use repositories::review_repository::ReviewRepository;
pub use repositories::tool_repository::ToolRepository;
pub use repositories::user_repository::UserRepository;
