pub mod order;
pub mod order_state;
pub mod outbox_status;
pub mod payment_outbox_entry;
pub mod payment_record;
pub mod review;
pub mod role;
pub mod tool;
pub mod user_account;
