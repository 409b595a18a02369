use crate::models::role::Role;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identity record, keyed by email. Created on first sign-in (upsert),
/// never deleted in-band.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserAccount {
    pub email: String,
    pub role: Role,
    pub name: Option<String>,
    /// Opaque profile fields; stored as-is and never interpreted here.
    pub profile: serde_json::Value,
    pub created_at: DateTime<Utc>,
}
