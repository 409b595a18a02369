use crate::error::{Result as ServerErrorResult, ServerError};

use tm_pay::DEFAULT_AMOUNT_SCALE;

use std::net::SocketAddr;
use std::path::PathBuf;

/// Server configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (default: 0.0.0.0:3000)
    pub bind_addr: SocketAddr,

    /// JWT secret for HS256 token issuance and validation (required)
    pub jwt_secret: String,

    /// Issued token lifetime in seconds (default: 3600)
    pub token_ttl_secs: i64,

    /// SQLite database file (default: marketplace.db)
    pub database_path: String,

    /// Payment provider secret key (required)
    pub payment_secret_key: String,

    /// Payment provider base URL (default: https://api.stripe.com)
    pub payment_base_url: String,

    /// Charge currency (default: usd)
    pub payment_currency: String,

    /// Price-to-minor-unit multiplier (default: 1000)
    pub payment_amount_scale: i64,

    /// Outbox reconciliation sweep interval in seconds (default: 60)
    pub outbox_sweep_secs: u64,

    /// Log level (default: info)
    pub log_level: log::LevelFilter,

    /// Optional log file; stdout when unset
    pub log_file: Option<PathBuf>,

    /// Enable colored logs (default: true)
    pub log_colored: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> ServerErrorResult<Self> {
        // Load .env file if present (development)
        let _ = dotenvy::dotenv();

        let bind_addr = std::env::var("BIND_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:3000".to_string())
            .parse()
            .map_err(|source| ServerError::InvalidBindAddr { source })?;

        let jwt_secret = std::env::var("JWT_SECRET")
            .map_err(|_| ServerError::MissingEnv { name: "JWT_SECRET" })?;

        let payment_secret_key =
            std::env::var("PAYMENT_SECRET_KEY").map_err(|_| ServerError::MissingEnv {
                name: "PAYMENT_SECRET_KEY",
            })?;

        Ok(Self {
            bind_addr,
            jwt_secret,

            token_ttl_secs: std::env::var("TOKEN_TTL_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(tm_auth::DEFAULT_TTL_SECS),

            database_path: std::env::var("DATABASE_PATH")
                .unwrap_or_else(|_| "marketplace.db".to_string()),

            payment_secret_key,

            payment_base_url: std::env::var("PAYMENT_BASE_URL")
                .unwrap_or_else(|_| "https://api.stripe.com".to_string()),

            payment_currency: std::env::var("PAYMENT_CURRENCY")
                .unwrap_or_else(|_| "usd".to_string()),

            payment_amount_scale: std::env::var("PAYMENT_AMOUNT_SCALE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_AMOUNT_SCALE),

            outbox_sweep_secs: std::env::var("OUTBOX_SWEEP_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(60),

            log_level: std::env::var("LOG_LEVEL")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(log::LevelFilter::Info),

            log_file: std::env::var("LOG_FILE").ok().map(PathBuf::from),

            log_colored: std::env::var("LOG_COLORED")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(true),
        })
    }
}
