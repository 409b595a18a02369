pub mod order_repository;
pub mod payment_outbox_repository;
pub mod payment_repository;
pub mod review_repository;
pub mod tool_repository;
pub mod user_repository;
