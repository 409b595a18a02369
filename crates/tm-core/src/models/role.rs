use crate::{CoreError, ErrorLocation, Result};

use std::panic::Location;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Account role. Stored live in the users collection; never embedded in
/// tokens, so promotion and revocation take effect on the next request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Customer,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Customer => "customer",
            Role::Admin => "admin",
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl FromStr for Role {
    type Err = CoreError;

    #[track_caller]
    fn from_str(value: &str) -> Result<Self> {
        match value {
            "customer" => Ok(Role::Customer),
            "admin" => Ok(Role::Admin),
            _ => Err(CoreError::InvalidRole {
                value: value.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
