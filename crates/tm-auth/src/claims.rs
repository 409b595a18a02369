use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use serde::{Deserialize, Serialize};
use tm_core::ErrorLocation;

/// JWT claims. The token binds an email identity and nothing else; in
/// particular the account role is never embedded, so role checks stay live.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (account email)
    pub sub: String,
    /// Expiration timestamp (Unix)
    pub exp: i64,
    /// Issued at timestamp (Unix)
    pub iat: i64,
}

impl Claims {
    /// Validate claims after JWT signature verification
    #[track_caller]
    pub fn validate(&self) -> AuthErrorResult<()> {
        if self.sub.is_empty() {
            return Err(AuthError::InvalidClaim {
                claim: "sub".to_string(),
                message: "sub (email) cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        if self.sub.len() > 254 {
            return Err(AuthError::InvalidClaim {
                claim: "sub".to_string(),
                message: "sub (email) exceeds maximum length".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }
}
