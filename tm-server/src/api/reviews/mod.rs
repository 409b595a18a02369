pub mod create_review_request;
pub mod review_dto;
pub mod review_list_response;
pub mod review_response;
pub mod reviews;
