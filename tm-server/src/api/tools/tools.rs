//! Tool catalog REST API handlers

use crate::{
    api::authz::require_admin, ApiError, ApiResult, AppState, CreateToolRequest, DeleteResponse,
    Identity, ToolDto, ToolListResponse, ToolResponse,
};

use tm_core::{ErrorLocation, Tool};
use tm_db::ToolRepository;

use std::panic::Location;

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

/// GET /api/v1/tools
pub async fn list_tools(State(state): State<AppState>) -> ApiResult<Json<ToolListResponse>> {
    let repo = ToolRepository::new(state.pool.clone());
    let tools = repo.find_all().await?;

    Ok(Json(ToolListResponse {
        tools: tools.into_iter().map(ToolDto::from).collect(),
    }))
}

/// GET /api/v1/tools/{id}
pub async fn get_tool(
    State(state): State<AppState>,
    Path(tool_id): Path<String>,
) -> ApiResult<Json<ToolResponse>> {
    let tool_uuid = Uuid::parse_str(&tool_id)?;

    let repo = ToolRepository::new(state.pool.clone());
    let tool = repo
        .find_by_id(tool_uuid)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: format!("Tool {} not found", tool_id),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(Json(ToolResponse { tool: tool.into() }))
}

/// POST /api/v1/tools
pub async fn create_tool(
    State(state): State<AppState>,
    Identity(email): Identity,
    Json(req): Json<CreateToolRequest>,
) -> ApiResult<Json<ToolResponse>> {
    require_admin(&state.pool, &email).await?;

    if req.name.trim().is_empty() {
        return Err(ApiError::Validation {
            message: "Tool name must not be empty".to_string(),
            field: Some("name".into()),
            location: ErrorLocation::from(Location::caller()),
        });
    }
    if !req.price.is_finite() || req.price <= 0.0 {
        return Err(ApiError::Validation {
            message: "Price must be a positive number".to_string(),
            field: Some("price".into()),
            location: ErrorLocation::from(Location::caller()),
        });
    }
    if req.min_order_qty < 1 || req.available_qty < 0 {
        return Err(ApiError::Validation {
            message: "Quantities out of range".to_string(),
            field: None,
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let tool = Tool::new(
        req.name,
        req.description,
        req.price,
        req.min_order_qty,
        req.available_qty,
    );

    let repo = ToolRepository::new(state.pool.clone());
    repo.create(&tool).await?;

    log::info!("Created tool {} ({})", tool.id, email);

    Ok(Json(ToolResponse { tool: tool.into() }))
}

/// DELETE /api/v1/tools/{id}
pub async fn delete_tool(
    State(state): State<AppState>,
    Identity(email): Identity,
    Path(tool_id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    require_admin(&state.pool, &email).await?;

    let tool_uuid = Uuid::parse_str(&tool_id)?;

    let repo = ToolRepository::new(state.pool.clone());
    let deleted = repo.delete(tool_uuid).await?;

    log::info!("Deleted tool {} ({} row(s), {})", tool_id, deleted, email);

    Ok(Json(DeleteResponse {
        deleted_count: deleted,
    }))
}
