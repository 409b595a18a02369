//! Role and ownership gates shared by the protected handlers.

use crate::{ApiError, ApiResult};

use tm_core::ErrorLocation;
use tm_db::UserRepository;

use std::panic::Location;

use sqlx::SqlitePool;

/// Require the admin role, looked up live in the accounts store.
///
/// The token carries only the identity, so a promotion or demotion takes
/// effect on the caller's very next request without reissuing the token.
pub async fn require_admin(pool: &SqlitePool, email: &str) -> ApiResult<()> {
    let repo = UserRepository::new(pool.clone());
    match repo.find_by_email(email).await? {
        Some(user) if user.role.is_admin() => Ok(()),
        _ => Err(ApiError::Forbidden {
            message: "Admin role required".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }),
    }
}

/// Owner match short-circuits without touching the store; anyone else must
/// hold the admin role.
pub async fn require_owner_or_admin(
    pool: &SqlitePool,
    identity: &str,
    owner: &str,
) -> ApiResult<()> {
    if identity == owner {
        return Ok(());
    }
    require_admin(pool, identity).await
}
