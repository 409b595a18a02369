//! Payment intent REST API handler

use crate::{ApiResult, AppState, CreateIntentRequest, Identity, IntentResponse};

use axum::{extract::State, Json};

/// POST /api/v1/payments/intent
///
/// Asks the provider for a card-payment intent and passes the client
/// secret back. Nothing is persisted here; the order only changes when the
/// client later confirms the completed charge.
pub async fn create_intent(
    State(state): State<AppState>,
    Identity(caller): Identity,
    Json(req): Json<CreateIntentRequest>,
) -> ApiResult<Json<IntentResponse>> {
    let intent = state.payments.create_intent(req.price).await?;

    log::debug!("Created payment intent for {}", caller);

    Ok(Json(IntentResponse {
        client_secret: intent.client_secret,
    }))
}
