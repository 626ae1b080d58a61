//! BLE data repository functions (generic over ConnectionTrait).

use sea_orm::ConnectionTrait;

use crate::adapters::ble_data_sea::{self as ble_adapter, BleDataCreate};
use crate::errors::domain::DomainError;

#[derive(Debug, Clone, PartialEq)]
pub struct BleRecord {
    pub id: i64,
    pub mac: String,
    pub level: i32,
    pub time: String,
    pub created_at: time::OffsetDateTime,
}

pub async fn count_all<C: ConnectionTrait + Send + Sync>(conn: &C) -> Result<u64, DomainError> {
    Ok(ble_adapter::count_all(conn).await?)
}

pub async fn list_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<BleRecord>, DomainError> {
    let rows = ble_adapter::list_all(conn).await?;
    Ok(rows.into_iter().map(BleRecord::from).collect())
}

/// `page` is 1-based; callers guarantee `page >= 1` and `per_page >= 1`.
pub async fn list_page<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    page: u64,
    per_page: u64,
) -> Result<Vec<BleRecord>, DomainError> {
    let rows = ble_adapter::list_page(conn, page.saturating_sub(1), per_page).await?;
    Ok(rows.into_iter().map(BleRecord::from).collect())
}

pub async fn create<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    mac: &str,
    level: i32,
    time: &str,
) -> Result<BleRecord, DomainError> {
    let dto = BleDataCreate {
        mac: mac.to_string(),
        level,
        time: time.to_string(),
    };
    let row = ble_adapter::create(conn, dto).await?;
    Ok(BleRecord::from(row))
}

pub async fn delete_all<C: ConnectionTrait + Send + Sync>(conn: &C) -> Result<u64, DomainError> {
    Ok(ble_adapter::delete_all(conn).await?)
}

impl From<crate::entities::ble_data::Model> for BleRecord {
    fn from(model: crate::entities::ble_data::Model) -> Self {
        Self {
            id: model.id,
            mac: model.mac,
            level: model.level,
            time: model.time,
            created_at: model.created_at,
        }
    }
}
