pub mod claims;
pub mod error;
pub mod token_service;

pub use claims::Claims;
pub use error::{AuthError, Result};
pub use token_service::{TokenService, DEFAULT_TTL_SECS};
