pub mod api;
pub mod config;
pub mod error;
pub mod health;
pub mod logger;
pub mod reconcile;
pub mod routes;
pub mod state;

pub use api::{
    authz::{require_admin, require_owner_or_admin},
    delete_response::DeleteResponse,
    error::ApiError,
    error::Result as ApiResult,
    extractors::identity::Identity,
    orders::{
        confirm_payment_request::ConfirmPaymentRequest,
        create_order_request::CreateOrderRequest,
        order_dto::OrderDto,
        order_list_response::OrderListResponse,
        order_response::OrderResponse,
        orders::{
            cancel_order, confirm_payment, get_order, list_orders, my_orders, place_order,
            ship_order,
        },
    },
    payments::{
        create_intent_request::CreateIntentRequest, intent_response::IntentResponse,
        payments::create_intent,
    },
    reviews::{
        create_review_request::CreateReviewRequest,
        review_dto::ReviewDto,
        review_list_response::ReviewListResponse,
        review_response::ReviewResponse,
        reviews::{create_review, list_reviews},
    },
    tools::{
        create_tool_request::CreateToolRequest,
        tool_dto::ToolDto,
        tool_list_response::ToolListResponse,
        tool_response::ToolResponse,
        tools::{create_tool, delete_tool, get_tool, list_tools},
    },
    update_response::UpdateResponse,
    users::{
        admin_status_response::AdminStatusResponse,
        sign_in_request::SignInRequest,
        sign_in_response::SignInResponse,
        update_profile_request::UpdateProfileRequest,
        user_dto::UserDto,
        user_list_response::UserListResponse,
        user_response::UserResponse,
        users::{admin_status, get_profile, list_users, make_admin, sign_in, update_profile},
    },
};

pub use crate::routes::build_router;
pub use crate::state::AppState;

use tm_auth::TokenService;
use tm_pay::PaymentIntentClient;

use std::error::Error;
use std::sync::Arc;

use log::{error, info};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load and validate configuration
    let config = config::Config::from_env()?;

    // Initialize logger (before any other logging)
    logger::initialize(config.log_level, config.log_file.clone(), config.log_colored)?;

    info!("Starting tm-server v{}", env!("CARGO_PKG_VERSION"));

    // Initialize database pool
    info!("Connecting to database: {}", config.database_path);

    let pool = SqlitePoolOptions::new()
        .max_connections(10)
        .connect_with(
            SqliteConnectOptions::new()
                .filename(&config.database_path)
                .create_if_missing(true)
                .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
                .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
                .busy_timeout(std::time::Duration::from_secs(5)),
        )
        .await?;

    info!("Database connection established");

    // Run migrations
    info!("Running database migrations...");
    sqlx::migrate!("../crates/tm-db/migrations").run(&pool).await?;
    info!("Migrations complete");

    let tokens = Arc::new(TokenService::with_hs256_and_ttl(
        config.jwt_secret.as_bytes(),
        config.token_ttl_secs,
    ));

    let payments = Arc::new(PaymentIntentClient::new(
        &config.payment_base_url,
        &config.payment_secret_key,
        &config.payment_currency,
        config.payment_amount_scale,
    ));
    info!("Payment provider bridge: {}", config.payment_base_url);

    // Build application state
    let app_state = AppState {
        pool,
        tokens,
        payments,
    };

    // Start the outbox reconciliation sweep
    reconcile::spawn_sweep(app_state.clone(), config.outbox_sweep_secs);
    info!(
        "Outbox reconciliation sweep started ({}s interval)",
        config.outbox_sweep_secs
    );

    // Build router
    let app = build_router(app_state);

    // Create TCP listener
    let listener = TcpListener::bind(&config.bind_addr).await?;
    info!("Server listening on {}", listener.local_addr()?);

    // Start server with graceful shutdown on SIGINT
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
                Err(e) => error!("Failed to listen for SIGINT: {}", e),
            }
        })
        .await?;

    info!("Graceful shutdown complete");

    Ok(())
}
