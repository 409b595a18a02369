pub mod create_intent_request;
pub mod intent_response;
pub mod payments;
