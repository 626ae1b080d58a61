//! Adapters for external dependencies.

pub mod ble_data_sea;
pub mod users_sea;
