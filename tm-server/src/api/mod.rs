pub mod authz;
pub mod delete_response;
pub mod error;
pub mod extractors;
pub mod orders;
pub mod payments;
pub mod reviews;
pub mod tools;
pub mod update_response;
pub mod users;
