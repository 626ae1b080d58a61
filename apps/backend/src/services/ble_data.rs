use sea_orm::ConnectionTrait;
use tracing::{debug, info};

use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::repos::ble_data::{self, BleRecord};

/// Requested page; only built when both values are positive integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// 1-based
    pub page: u64,
    pub count: u64,
}

impl PageRequest {
    /// `None` (list everything) unless both parameters parse as positive integers.
    pub fn from_query(page: Option<&str>, count: Option<&str>) -> Option<Self> {
        let positive = |raw: Option<&str>| {
            raw.and_then(|s| s.trim().parse::<u64>().ok())
                .filter(|n| *n > 0)
        };
        Some(Self {
            page: positive(page)?,
            count: positive(count)?,
        })
    }

    /// Rows skipped before this page, or `None` when it does not fit a SQL
    /// `OFFSET` (such a page cannot hold any rows).
    pub fn offset(&self) -> Option<u64> {
        if self.count > i64::MAX as u64 {
            return None;
        }
        self.page
            .checked_sub(1)?
            .checked_mul(self.count)
            .filter(|offset| *offset <= i64::MAX as u64)
    }
}

fn empty_page() -> AppError {
    AppError::not_found(ErrorCode::DataNotFound, "No data found for this page")
}

#[derive(Debug, Clone)]
pub struct BleListing {
    pub items: Vec<BleRecord>,
    /// Size of the whole table, regardless of paging.
    pub total_count: u64,
}

pub async fn list<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    paging: Option<PageRequest>,
) -> Result<BleListing, AppError> {
    let total_count = ble_data::count_all(conn).await?;

    let items = match paging {
        Some(request @ PageRequest { page, count }) => {
            if request.offset().is_none() {
                debug!(page, count, total_count, "requested page is past any addressable row");
                return Err(empty_page());
            }
            let items = ble_data::list_page(conn, page, count).await?;
            if items.is_empty() {
                debug!(page, count, total_count, "requested page is empty");
                return Err(empty_page());
            }
            items
        }
        None => ble_data::list_all(conn).await?,
    };

    Ok(BleListing { items, total_count })
}

pub async fn upload<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    mac: &str,
    level: i32,
    time: &str,
) -> Result<BleRecord, AppError> {
    let (mac, time) = (mac.trim(), time.trim());
    if mac.is_empty() || time.is_empty() {
        return Err(AppError::bad_request(
            ErrorCode::InvalidDataFormat,
            "wrong data format",
        ));
    }

    let record = ble_data::create(conn, mac, level, time).await?;
    debug!(id = record.id, mac = %record.mac, level = record.level, "ble record stored");
    Ok(record)
}

/// Remove every record. Run inside a transaction so a failure leaves the table intact.
pub async fn delete_all<C: ConnectionTrait + Send + Sync>(conn: &C) -> Result<u64, AppError> {
    let deleted = ble_data::delete_all(conn).await?;
    info!(deleted, "ble data cleared");
    Ok(deleted)
}
