//! Token validation shared by every protected endpoint.
//!
//! Checks run in a fixed order so the rejection reason is deterministic:
//! missing header, revoked token, bad signature or payload, expiry, and
//! finally the user lookup.

use sea_orm::ConnectionTrait;
use thiserror::Error;

use crate::auth::jwt::{decode_access_token, Claims};
use crate::auth::revocation::RevocationSet;
use crate::repos::users::{self, User};
use crate::state::security_config::SecurityConfig;
use crate::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("missing token")]
    MissingToken,
    #[error("token revoked")]
    Revoked,
    #[error("invalid token")]
    InvalidToken,
    #[error("token expired")]
    Expired,
}

/// Identity handed to protected handlers.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user: User,
    /// Raw header value, needed to revoke on logout.
    pub token: String,
    pub claims: Claims,
}

/// Everything short of the database lookup. `raw` is `None` when the header
/// is absent or not visible ASCII.
pub fn check_token(
    raw: Option<&str>,
    now: i64,
    security: &SecurityConfig,
    revocations: &RevocationSet,
) -> Result<Claims, AuthError> {
    let token = raw
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or(AuthError::MissingToken)?;

    if revocations.is_revoked(token) {
        return Err(AuthError::Revoked);
    }

    let claims = decode_access_token(token, security)?;

    if claims.exp <= now {
        return Err(AuthError::Expired);
    }

    Ok(claims)
}

/// Last gate step: resolve claims already accepted by [`check_token`] to a
/// stored user. A token for an unknown user is `InvalidToken`.
pub async fn resolve_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    raw: &str,
    claims: Claims,
) -> Result<AuthenticatedUser, AppError> {
    let user = users::find_by_public_id(conn, &claims.public_id)
        .await?
        .ok_or_else(|| {
            tracing::debug!(public_id = %claims.public_id, "token refers to unknown user");
            AppError::from(AuthError::InvalidToken)
        })?;

    Ok(AuthenticatedUser {
        user,
        token: raw.trim().to_string(),
        claims,
    })
}
