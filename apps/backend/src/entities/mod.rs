pub mod ble_data;
pub mod users;

pub use ble_data::Entity as BleData;
pub use users::Entity as Users;
pub use users::Model as User;
