//! SeaORM adapter for BLE data repository.

use sea_orm::{
    ActiveModelTrait, ConnectionTrait, EntityTrait, NotSet, PaginatorTrait, QueryOrder, Set,
};

use crate::entities::ble_data;

pub mod dto;

pub use dto::BleDataCreate;

pub async fn count_all<C: ConnectionTrait + Send + Sync>(conn: &C) -> Result<u64, sea_orm::DbErr> {
    ble_data::Entity::find().count(conn).await
}

/// Every row, newest first.
pub async fn list_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<ble_data::Model>, sea_orm::DbErr> {
    ble_data::Entity::find()
        .order_by_desc(ble_data::Column::Id)
        .all(conn)
        .await
}

/// One page, newest first. `page` is zero-based here.
pub async fn list_page<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    page: u64,
    per_page: u64,
) -> Result<Vec<ble_data::Model>, sea_orm::DbErr> {
    ble_data::Entity::find()
        .order_by_desc(ble_data::Column::Id)
        .paginate(conn, per_page)
        .fetch_page(page)
        .await
}

pub async fn create<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: BleDataCreate,
) -> Result<ble_data::Model, sea_orm::DbErr> {
    let active = ble_data::ActiveModel {
        id: NotSet,
        mac: Set(dto.mac),
        level: Set(dto.level),
        time: Set(dto.time),
        created_at: Set(time::OffsetDateTime::now_utc()),
    };

    active.insert(conn).await
}

pub async fn delete_all<C: ConnectionTrait + Send + Sync>(conn: &C) -> Result<u64, sea_orm::DbErr> {
    let result = ble_data::Entity::delete_many().exec(conn).await?;
    Ok(result.rows_affected)
}
