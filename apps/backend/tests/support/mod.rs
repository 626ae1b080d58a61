#![allow(dead_code)]

pub mod app_builder;
pub mod auth;
pub mod factory;

pub use app_builder::{create_test_app, test_state};
pub use auth::{mint_test_token, mint_token_at, TOKEN_HEADER};
pub use factory::{seed_ble, seed_user, SeededUser};
