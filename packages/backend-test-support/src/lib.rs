//! Shared helpers for the backend's integration tests: logging bootstrap,
//! collision-free fixture data, and assertions for the JSON error envelope.

pub mod error_body;
pub mod logging;
pub mod unique_helpers;

pub use error_body::assert_error_body;
pub use unique_helpers::{unique_email, unique_mac, unique_str};
