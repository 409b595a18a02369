use crate::{AuthError, Claims, Result as AuthErrorResult};

use tm_core::ErrorLocation;

use std::panic::Location;

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

/// Token lifetime: one hour.
pub const DEFAULT_TTL_SECS: i64 = 3600;

/// Issues and verifies signed identity tokens (HS256).
///
/// A token is a self-contained capability for the embedded email identity.
/// It is never persisted and carries no role information.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl_secs: i64,
}

impl TokenService {
    pub fn with_hs256(secret: &[u8]) -> Self {
        Self::with_hs256_and_ttl(secret, DEFAULT_TTL_SECS)
    }

    /// Custom lifetime, used by tests to mint already-expired tokens.
    pub fn with_hs256_and_ttl(secret: &[u8], ttl_secs: i64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 30; // 30 second clock skew tolerance

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            ttl_secs,
        }
    }

    /// Sign a fresh token binding `email` for the configured lifetime.
    #[track_caller]
    pub fn issue(&self, email: &str) -> AuthErrorResult<String> {
        let now = chrono::Utc::now().timestamp();
        let claims = Claims {
            sub: email.to_string(),
            iat: now,
            exp: now + self.ttl_secs,
        };
        claims.validate()?;

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            AuthError::JwtEncode {
                source: e,
                location: ErrorLocation::from(Location::caller()),
            }
        })
    }

    /// Verify signature and expiry, returning the claims on success.
    #[track_caller]
    pub fn verify(&self, token: &str) -> AuthErrorResult<Claims> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;
                match e.kind() {
                    ErrorKind::ExpiredSignature => AuthError::TokenExpired {
                        location: ErrorLocation::from(Location::caller()),
                    },
                    _ => AuthError::JwtDecode {
                        source: e,
                        location: ErrorLocation::from(Location::caller()),
                    },
                }
            })?;

        // Additional claim validation
        token_data.claims.validate()?;

        Ok(token_data.claims)
    }
}
