//! Axum extractor for the bearer-token access gate

use crate::{ApiError, AppState};

use tm_auth::AuthError;
use tm_core::ErrorLocation;

use std::future::Future;
use std::panic::Location;

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

/// Verified caller identity: the email bound in the bearer token.
///
/// Rejections happen before any handler runs. A request with no
/// Authorization header at all is 401; a header whose credential fails
/// verification is 403.
pub struct Identity(pub String);

impl FromRequestParts<AppState> for Identity {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let header = parts
                .headers
                .get(AUTHORIZATION)
                .ok_or_else(|| AuthError::MissingHeader {
                    location: ErrorLocation::from(Location::caller()),
                })?;

            let raw = header.to_str().map_err(|_| AuthError::InvalidToken {
                message: "Authorization header is not valid UTF-8".to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

            let token = raw
                .strip_prefix("Bearer ")
                .ok_or_else(|| AuthError::InvalidScheme {
                    location: ErrorLocation::from(Location::caller()),
                })?;

            let claims = state.tokens.verify(token)?;

            log::debug!("Authenticated request for {}", claims.sub);
            Ok(Identity(claims.sub))
        }
    }
}
