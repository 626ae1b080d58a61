use std::env;
use std::time::Duration;

use jsonwebtoken::Algorithm;

use crate::AppError;

pub const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(30 * 60);

/// Configuration for JWT security settings
#[derive(Debug, Clone)]
pub struct SecurityConfig {
    /// JWT secret key for signing and verifying tokens
    pub jwt_secret: Vec<u8>,
    /// JWT algorithm; verification is pinned to it
    pub algorithm: Algorithm,
    /// Lifetime of minted access tokens
    pub token_ttl: Duration,
}

impl SecurityConfig {
    /// Create a new SecurityConfig with the given JWT secret and the default TTL
    pub fn new(jwt_secret: impl Into<Vec<u8>>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            algorithm: Algorithm::HS256,
            token_ttl: DEFAULT_TOKEN_TTL,
        }
    }

    pub fn with_token_ttl(mut self, ttl: Duration) -> Self {
        self.token_ttl = ttl;
        self
    }

    /// Read `BACKEND_JWT_SECRET` (required) and `BACKEND_TOKEN_TTL_MINUTES`.
    pub fn from_env() -> Result<Self, AppError> {
        let secret = env::var("BACKEND_JWT_SECRET")
            .ok()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| AppError::config("BACKEND_JWT_SECRET must be set"))?;

        let ttl = match env::var("BACKEND_TOKEN_TTL_MINUTES") {
            Ok(raw) => {
                let minutes: u64 = raw.trim().parse().map_err(|_| {
                    AppError::config(format!("BACKEND_TOKEN_TTL_MINUTES is not a number: {raw}"))
                })?;
                if minutes == 0 {
                    return Err(AppError::config("BACKEND_TOKEN_TTL_MINUTES must be positive"));
                }
                let secs = minutes
                    .checked_mul(60)
                    .filter(|secs| *secs <= i64::MAX as u64)
                    .ok_or_else(|| {
                        AppError::config(format!("BACKEND_TOKEN_TTL_MINUTES is too large: {raw}"))
                    })?;
                Duration::from_secs(secs)
            }
            Err(_) => DEFAULT_TOKEN_TTL,
        };

        Ok(Self::new(secret).with_token_ttl(ttl))
    }

    /// Random-ish secret per process so tests never share a key with prod.
    pub fn for_tests() -> Self {
        Self::new(format!("test-secret-{}", uuid::Uuid::new_v4()))
    }
}
