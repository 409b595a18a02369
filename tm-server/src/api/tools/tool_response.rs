use crate::ToolDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ToolResponse {
    pub tool: ToolDto,
}
