//! DTOs for ble_data_sea adapter.

#[derive(Debug, Clone)]
pub struct BleDataCreate {
    pub mac: String,
    pub level: i32,
    pub time: String,
}
