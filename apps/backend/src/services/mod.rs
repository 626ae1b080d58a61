pub mod ble_data;
pub mod users;
