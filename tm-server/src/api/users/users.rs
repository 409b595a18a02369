//! Account and profile REST API handlers

use crate::{
    api::authz::require_admin, AdminStatusResponse, ApiError, ApiResult, AppState, Identity,
    SignInRequest, SignInResponse, UpdateProfileRequest, UpdateResponse, UserDto,
    UserListResponse, UserResponse,
};

use tm_core::{ErrorLocation, Role};
use tm_db::UserRepository;

use std::panic::Location;

use axum::{
    extract::{Path, State},
    Json,
};

/// PUT /api/v1/users/{email}
///
/// Sign-in upsert. Creates the account on first sight (customer role) and
/// refreshes name/profile afterwards; the stored role is never touched, so
/// signing in again does not undo a promotion. Always returns a fresh token.
pub async fn sign_in(
    State(state): State<AppState>,
    Path(email): Path<String>,
    Json(req): Json<SignInRequest>,
) -> ApiResult<Json<SignInResponse>> {
    validate_email(&email)?;

    let profile = req.profile.unwrap_or(serde_json::Value::Null);

    let repo = UserRepository::new(state.pool.clone());
    repo.upsert(&email, req.name.as_deref(), &profile).await?;

    let user = repo
        .find_by_email(&email)
        .await?
        .ok_or_else(|| ApiError::Internal {
            message: "Account missing after sign-in upsert".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

    let token = state.tokens.issue(&email)?;

    log::info!("Signed in {}", email);

    Ok(Json(SignInResponse {
        user: user.into(),
        token,
    }))
}

/// GET /api/v1/users
pub async fn list_users(
    State(state): State<AppState>,
    Identity(caller): Identity,
) -> ApiResult<Json<UserListResponse>> {
    require_admin(&state.pool, &caller).await?;

    let repo = UserRepository::new(state.pool.clone());
    let users = repo.find_all().await?;

    Ok(Json(UserListResponse {
        users: users.into_iter().map(UserDto::from).collect(),
    }))
}

/// GET /api/v1/users/{email}/admin
///
/// Public role probe; an unknown email simply reads as not-admin.
pub async fn admin_status(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> ApiResult<Json<AdminStatusResponse>> {
    let repo = UserRepository::new(state.pool.clone());
    let admin = repo
        .find_by_email(&email)
        .await?
        .map(|u| u.role.is_admin())
        .unwrap_or(false);

    Ok(Json(AdminStatusResponse { admin }))
}

/// PUT /api/v1/users/{email}/admin
pub async fn make_admin(
    State(state): State<AppState>,
    Identity(caller): Identity,
    Path(email): Path<String>,
) -> ApiResult<Json<UpdateResponse>> {
    require_admin(&state.pool, &caller).await?;

    let repo = UserRepository::new(state.pool.clone());
    let matched = repo.set_role(&email, Role::Admin).await?;

    log::info!("Granted admin to {} ({} row(s), by {})", email, matched, caller);

    Ok(Json(UpdateResponse {
        acknowledged: true,
        matched_count: matched,
        modified_count: matched,
    }))
}

/// GET /api/v1/profile/{email}
pub async fn get_profile(
    State(state): State<AppState>,
    Identity(caller): Identity,
    Path(email): Path<String>,
) -> ApiResult<Json<UserResponse>> {
    require_owner(&caller, &email)?;

    let repo = UserRepository::new(state.pool.clone());
    let user = repo
        .find_by_email(&email)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: format!("User {} not found", email),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(Json(UserResponse { user: user.into() }))
}

/// PUT /api/v1/profile/{email}
pub async fn update_profile(
    State(state): State<AppState>,
    Identity(caller): Identity,
    Path(email): Path<String>,
    Json(req): Json<UpdateProfileRequest>,
) -> ApiResult<Json<UpdateResponse>> {
    require_owner(&caller, &email)?;

    let profile = req.profile.unwrap_or(serde_json::Value::Null);

    let repo = UserRepository::new(state.pool.clone());
    let matched = repo
        .update_profile(&email, req.name.as_deref(), &profile)
        .await?;

    log::info!("Updated profile for {} ({} row(s))", email, matched);

    Ok(Json(UpdateResponse {
        acknowledged: true,
        matched_count: matched,
        modified_count: matched,
    }))
}

/// Profile routes are strictly owner-scoped; even admins read accounts
/// through the users listing instead.
fn require_owner(caller: &str, owner: &str) -> ApiResult<()> {
    if caller == owner {
        return Ok(());
    }
    Err(ApiError::Forbidden {
        message: "Profile access is limited to the owner".to_string(),
        location: ErrorLocation::from(Location::caller()),
    })
}

fn validate_email(email: &str) -> ApiResult<()> {
    if email.trim().is_empty() || !email.contains('@') || email.len() > 254 {
        return Err(ApiError::Validation {
            message: "Invalid email address".to_string(),
            field: Some("email".into()),
            location: ErrorLocation::from(Location::caller()),
        });
    }
    Ok(())
}
