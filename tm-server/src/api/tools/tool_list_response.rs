use crate::ToolDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ToolListResponse {
    pub tools: Vec<ToolDto>,
}
