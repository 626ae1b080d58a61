use backend::repos::users::User;
use backend::services::{ble_data, users};
use backend::state::app_state::AppState;
use backend_test_support::{unique_email, unique_mac, unique_str};

use super::auth::mint_test_token;

/// A stored user plus the plaintext password and a live token.
pub struct SeededUser {
    pub user: User,
    pub password: String,
    pub token: String,
}

pub async fn seed_user(state: &AppState, prefix: &str) -> SeededUser {
    let db = state.require_db().expect("test state has a database");
    let password = unique_str("pw");
    let user = users::signup(
        db,
        Some(&unique_str(prefix)),
        Some(&unique_email(prefix)),
        Some(&password),
    )
    .await
    .expect("seed user");
    let token = mint_test_token(&user.public_id, &state.security);

    SeededUser {
        user,
        password,
        token,
    }
}

/// Insert `n` BLE records with times `t0..t{n-1}` in insertion order.
pub async fn seed_ble(state: &AppState, n: usize) {
    let db = state.require_db().expect("test state has a database");
    for i in 0..n {
        ble_data::upload(db, &unique_mac(), -40 - i as i32, &format!("t{i}"))
            .await
            .expect("seed ble record");
    }
}
