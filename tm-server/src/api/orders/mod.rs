pub mod confirm_payment_request;
pub mod create_order_request;
pub mod order_dto;
pub mod order_list_response;
pub mod order_response;
pub mod orders;
