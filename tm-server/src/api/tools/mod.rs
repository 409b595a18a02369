pub mod create_tool_request;
pub mod tool_dto;
pub mod tool_list_response;
pub mod tool_response;
pub mod tools;
