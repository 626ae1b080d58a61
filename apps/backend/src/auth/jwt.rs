use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::auth::gate::AuthError;
use crate::state::security_config::SecurityConfig;
use crate::AppError;

/// Claims carried by backend-issued access tokens.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Claims {
    /// Public user identifier (users.public_id)
    pub public_id: String,
    /// Expiry (seconds since epoch)
    pub exp: i64,
    /// Issued-at (seconds since epoch)
    #[serde(default)]
    pub iat: i64,
}

pub fn unix_seconds(now: SystemTime) -> Result<i64, AppError> {
    now.duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .map_err(|_| AppError::internal("System clock is before the unix epoch"))
}

/// Mint a HS256 access token for `public_id` expiring `security.token_ttl` after `now`.
pub fn mint_access_token(
    public_id: &str,
    now: SystemTime,
    security: &SecurityConfig,
) -> Result<String, AppError> {
    let iat = unix_seconds(now)?;
    let exp = i64::try_from(security.token_ttl.as_secs())
        .ok()
        .and_then(|ttl| iat.checked_add(ttl))
        .ok_or_else(|| AppError::config("Token TTL does not fit a unix timestamp"))?;

    let claims = Claims {
        public_id: public_id.to_string(),
        exp,
        iat,
    };

    encode(
        &Header::new(security.algorithm),
        &claims,
        &EncodingKey::from_secret(&security.jwt_secret),
    )
    .map_err(|e| AppError::internal(format!("Failed to encode JWT: {e}")))
}

/// Verify signature and payload shape. Expiry is left to the caller, which
/// compares `exp` against an explicit clock.
pub fn decode_access_token(token: &str, security: &SecurityConfig) -> Result<Claims, AuthError> {
    let mut validation = Validation::new(security.algorithm);
    validation.validate_exp = false;
    validation.leeway = 0;
    validation.required_spec_claims.clear();

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(&security.jwt_secret),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| {
        tracing::debug!(kind = ?e.kind(), "token rejected by decoder");
        AuthError::InvalidToken
    })
}
