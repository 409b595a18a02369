use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Missing required environment variable: {name}")]
    MissingEnv { name: &'static str },

    #[error("Invalid BIND_ADDR: {source}")]
    InvalidBindAddr {
        #[source]
        source: std::net::AddrParseError,
    },

    #[error("Logger setup failed: {message}")]
    Logger { message: String },
}

pub type Result<T> = std::result::Result<T, ServerError>;
