use crate::{health, AppState};

use crate::{
    admin_status, cancel_order, confirm_payment, create_intent, create_review, create_tool,
    delete_tool, get_order, get_profile, get_tool, list_orders, list_reviews, list_tools,
    list_users, make_admin, my_orders, place_order, ship_order, sign_in, update_profile,
};

use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/live", get(health::liveness))
        .route("/ready", get(health::readiness))
        // Tool catalog
        .route("/api/v1/tools", get(list_tools).post(create_tool))
        .route("/api/v1/tools/{id}", get(get_tool).delete(delete_tool))
        // Accounts and profiles
        .route("/api/v1/users", get(list_users))
        .route("/api/v1/users/{email}", put(sign_in))
        .route(
            "/api/v1/users/{email}/admin",
            get(admin_status).put(make_admin),
        )
        .route(
            "/api/v1/profile/{email}",
            get(get_profile).put(update_profile),
        )
        // Order lifecycle
        .route("/api/v1/orders", get(list_orders).post(place_order))
        .route("/api/v1/orders/{id}", get(get_order).delete(cancel_order))
        .route("/api/v1/orders/{id}/payment", post(confirm_payment))
        .route("/api/v1/orders/{id}/ship", put(ship_order))
        .route("/api/v1/my-orders/{email}", get(my_orders))
        // Payment intents
        .route("/api/v1/payments/intent", post(create_intent))
        // Reviews
        .route("/api/v1/reviews", get(list_reviews).post(create_review))
        // Add shared state
        .with_state(state)
        // CORS middleware (browser storefront calls from another origin)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
