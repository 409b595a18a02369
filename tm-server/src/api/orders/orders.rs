//! Order lifecycle REST API handlers
//!
//! Transitions are conditioned on the row's current state at execution
//! time, so two racing requests cannot skip a lifecycle edge.

use crate::{
    api::authz::{require_admin, require_owner_or_admin},
    ApiError, ApiResult, AppState, ConfirmPaymentRequest, CreateOrderRequest, DeleteResponse,
    Identity, OrderDto, OrderListResponse, OrderResponse, UpdateResponse,
};

use tm_core::{ErrorLocation, Order, OrderState, PaymentOutboxEntry, PaymentRecord};
use tm_db::{OrderRepository, PaymentOutboxRepository, PaymentRepository, ToolRepository};

use std::panic::Location;

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

/// POST /api/v1/orders
pub async fn place_order(
    State(state): State<AppState>,
    Identity(email): Identity,
    Json(req): Json<CreateOrderRequest>,
) -> ApiResult<Json<OrderResponse>> {
    let tool_uuid = Uuid::parse_str(&req.tool_id)?;

    if req.quantity < 1 {
        return Err(ApiError::Validation {
            message: "Quantity must be at least 1".to_string(),
            field: Some("quantity".into()),
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

    // Orders may only reference a tool that is actually in the catalog.
    ToolRepository::new(state.pool.clone())
        .find_by_id(tool_uuid)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: format!("Tool {} not found", req.tool_id),
            location: ErrorLocation::from(Location::caller()),
        })?;

    let order = Order::new(email.clone(), tool_uuid, req.quantity, req.price);
    OrderRepository::new(state.pool.clone())
        .create(&order)
        .await?;

    log::info!("Placed order {} ({})", order.id, email);

    Ok(Json(OrderResponse {
        order: order.into(),
    }))
}

/// GET /api/v1/orders
pub async fn list_orders(
    State(state): State<AppState>,
    Identity(caller): Identity,
) -> ApiResult<Json<OrderListResponse>> {
    require_admin(&state.pool, &caller).await?;

    let orders = OrderRepository::new(state.pool.clone()).find_all().await?;

    Ok(Json(OrderListResponse {
        orders: orders.into_iter().map(OrderDto::from).collect(),
    }))
}

/// GET /api/v1/orders/{id}
pub async fn get_order(
    State(state): State<AppState>,
    Identity(caller): Identity,
    Path(order_id): Path<String>,
) -> ApiResult<Json<OrderResponse>> {
    let order_uuid = Uuid::parse_str(&order_id)?;

    let order = OrderRepository::new(state.pool.clone())
        .find_by_id(order_uuid)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: format!("Order {} not found", order_id),
            location: ErrorLocation::from(Location::caller()),
        })?;

    require_owner_or_admin(&state.pool, &caller, &order.email).await?;

    Ok(Json(OrderResponse {
        order: order.into(),
    }))
}

/// GET /api/v1/my-orders/{email}
pub async fn my_orders(
    State(state): State<AppState>,
    Identity(caller): Identity,
    Path(email): Path<String>,
) -> ApiResult<Json<OrderListResponse>> {
    if caller != email {
        return Err(ApiError::Forbidden {
            message: "Order history is limited to the owner".to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let orders = OrderRepository::new(state.pool.clone())
        .find_by_email(&email)
        .await?;

    Ok(Json(OrderListResponse {
        orders: orders.into_iter().map(OrderDto::from).collect(),
    }))
}

/// DELETE /api/v1/orders/{id}
///
/// Owners may cancel an order only while it is still placed; admins may
/// purge any order regardless of state. A missing row is a no-op.
pub async fn cancel_order(
    State(state): State<AppState>,
    Identity(caller): Identity,
    Path(order_id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let order_uuid = Uuid::parse_str(&order_id)?;
    let orders = OrderRepository::new(state.pool.clone());

    let Some(order) = orders.find_by_id(order_uuid).await? else {
        return Ok(Json(DeleteResponse { deleted_count: 0 }));
    };

    if order.is_owned_by(&caller) {
        if order.state != OrderState::Placed {
            return Err(ApiError::InvalidState {
                message: format!("Order {} can no longer be cancelled", order_id),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let deleted = orders.delete_if_placed(order_uuid).await?;
        if deleted == 0 {
            // State moved between the read and the delete.
            return Err(ApiError::InvalidState {
                message: format!("Order {} can no longer be cancelled", order_id),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        log::info!("Cancelled order {} ({})", order_id, caller);
        return Ok(Json(DeleteResponse {
            deleted_count: deleted,
        }));
    }

    require_admin(&state.pool, &caller).await?;
    let deleted = orders.delete(order_uuid).await?;

    log::info!("Purged order {} ({} row(s), by {})", order_id, deleted, caller);

    Ok(Json(DeleteResponse {
        deleted_count: deleted,
    }))
}

/// POST /api/v1/orders/{id}/payment
///
/// Confirms a completed charge: the order flips to paid and a payment
/// record is inserted. An outbox entry brackets the two writes so a crash
/// between them is repaired by the reconciliation sweep instead of losing
/// the payment record.
pub async fn confirm_payment(
    State(state): State<AppState>,
    Identity(caller): Identity,
    Path(order_id): Path<String>,
    Json(req): Json<ConfirmPaymentRequest>,
) -> ApiResult<Json<UpdateResponse>> {
    let order_uuid = Uuid::parse_str(&order_id)?;

    if req.transaction_id.trim().is_empty() {
        return Err(ApiError::Validation {
            message: "Transaction id must not be empty".to_string(),
            field: Some("transaction_id".into()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let orders = OrderRepository::new(state.pool.clone());
    let order = orders
        .find_by_id(order_uuid)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: format!("Order {} not found", order_id),
            location: ErrorLocation::from(Location::caller()),
        })?;

    if !order.is_owned_by(&caller) {
        return Err(ApiError::Forbidden {
            message: "Only the order owner can confirm payment".to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    }
    if order.state != OrderState::Placed {
        return Err(ApiError::InvalidState {
            message: format!("Order {} is already {}", order_id, order.state.as_str()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let outbox = PaymentOutboxRepository::new(state.pool.clone());
    let entry = PaymentOutboxEntry::new(
        order.id,
        req.transaction_id.clone(),
        order.email.clone(),
        order.price,
    );
    outbox.create(&entry).await?;

    let updated = orders.mark_paid(order.id, &req.transaction_id).await?;
    if updated == 0 {
        // Lost a race with another confirm; retire the intent entry.
        if let Err(e) = outbox.mark_complete(entry.id).await {
            log::warn!("Failed to retire outbox entry {}: {}", entry.id, e);
        }
        return Err(ApiError::InvalidState {
            message: format!("Order {} is no longer awaiting payment", order_id),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let record = PaymentRecord::new(
        req.transaction_id.clone(),
        order.id,
        order.email.clone(),
        order.price,
    );
    match PaymentRepository::new(state.pool.clone()).insert(&record).await {
        Ok(_) => {
            if let Err(e) = outbox.mark_complete(entry.id).await {
                log::warn!(
                    "Payment recorded but outbox entry {} not retired: {}",
                    entry.id,
                    e
                );
            }
        }
        Err(e) => {
            // The order is paid; the sweep will finish the payment record.
            log::warn!(
                "Payment record insert failed for order {} (tx {}): {}",
                order_id,
                req.transaction_id,
                e
            );
        }
    }

    log::info!(
        "Confirmed payment for order {} (tx {})",
        order_id,
        req.transaction_id
    );

    Ok(Json(UpdateResponse {
        acknowledged: true,
        matched_count: updated,
        modified_count: updated,
    }))
}

/// PUT /api/v1/orders/{id}/ship
///
/// Shipping an already-shipped order is an idempotent success; an unpaid
/// order is rejected.
pub async fn ship_order(
    State(state): State<AppState>,
    Identity(caller): Identity,
    Path(order_id): Path<String>,
) -> ApiResult<Json<UpdateResponse>> {
    require_admin(&state.pool, &caller).await?;

    let order_uuid = Uuid::parse_str(&order_id)?;

    let orders = OrderRepository::new(state.pool.clone());
    let order = orders
        .find_by_id(order_uuid)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: format!("Order {} not found", order_id),
            location: ErrorLocation::from(Location::caller()),
        })?;

    if order.state == OrderState::Placed {
        return Err(ApiError::InvalidState {
            message: format!("Order {} has not been paid", order_id),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let updated = orders.mark_shipped(order_uuid).await?;
    if updated == 0 {
        // The order was cancelled or purged between the read and the update.
        return Err(ApiError::InvalidState {
            message: format!("Order {} is no longer shippable", order_id),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    log::info!("Marked order {} shipped (by {})", order_id, caller);

    Ok(Json(UpdateResponse {
        acknowledged: true,
        matched_count: updated,
        modified_count: updated,
    }))
}
