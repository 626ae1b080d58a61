//! Repository functions for the domain layer.

pub mod ble_data;
pub mod users;
