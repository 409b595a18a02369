pub mod admin_status_response;
pub mod sign_in_request;
pub mod sign_in_response;
pub mod update_profile_request;
pub mod user_dto;
pub mod user_list_response;
pub mod user_response;
pub mod users;
