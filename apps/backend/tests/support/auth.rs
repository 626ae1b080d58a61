//! Token helpers for tests

use std::time::{Duration, SystemTime};

use backend::auth::jwt::mint_access_token;
use backend::state::security_config::SecurityConfig;

pub use backend::middleware::TOKEN_HEADER;

/// Mint a token for `public_id` issued now.
pub fn mint_test_token(public_id: &str, sec: &SecurityConfig) -> String {
    mint_access_token(public_id, SystemTime::now(), sec).expect("should mint token successfully")
}

/// Mint a token issued `ago` in the past (use a duration past the TTL for
/// an expired token).
pub fn mint_token_at(public_id: &str, ago: Duration, sec: &SecurityConfig) -> String {
    let issued = SystemTime::now()
        .checked_sub(ago)
        .expect("issue time should be representable");
    mint_access_token(public_id, issued, sec).expect("should mint token successfully")
}
