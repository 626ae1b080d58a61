use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr, PickFirst};

use crate::db::require_db;
use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::extractors::ValidatedJson;
use crate::repos::ble_data::BleRecord;
use crate::services::ble_data::{self as ble_service, PageRequest};
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
    pub count: Option<String>,
}

/// Upload body. `level` may arrive as a JSON number or a numeric string.
#[serde_as]
#[derive(Debug, Deserialize)]
pub struct UploadRequest {
    pub mac: String,
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub level: i32,
    pub time: String,
}

#[derive(Debug, Serialize)]
pub struct BleView {
    pub id: i64,
    pub mac: String,
    pub level: i32,
    pub time: String,
}

impl From<BleRecord> for BleView {
    fn from(record: BleRecord) -> Self {
        Self {
            id: record.id,
            mac: record.mac,
            level: record.level,
            time: record.time,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ListResponse {
    items: Vec<BleView>,
    total_count: u64,
    error: Option<()>,
}

#[derive(Debug, Serialize)]
struct UploadResponse {
    #[serde(flatten)]
    record: BleView,
    error: Option<()>,
}

#[derive(Debug, Serialize)]
struct DeleteResponse {
    deleted: u64,
    error: Option<()>,
}

async fn list(
    query: web::Query<PageQuery>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let paging = PageRequest::from_query(query.page.as_deref(), query.count.as_deref());
    let listing = ble_service::list(db, paging).await?;

    Ok(HttpResponse::Ok().json(ListResponse {
        items: listing.items.into_iter().map(BleView::from).collect(),
        total_count: listing.total_count,
        error: None,
    }))
}

async fn upload(
    body: ValidatedJson<UploadRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let UploadRequest { mac, level, time } = body.into_inner();

    let record = with_txn(db, move |txn| {
        Box::pin(async move { ble_service::upload(txn, &mac, level, &time).await })
    })
    .await?;

    Ok(HttpResponse::Created().json(UploadResponse {
        record: record.into(),
        error: None,
    }))
}

async fn delete_all(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;

    let deleted = with_txn(db, |txn| {
        Box::pin(async move { ble_service::delete_all(txn).await })
    })
    .await?;

    Ok(HttpResponse::Ok().json(DeleteResponse {
        deleted,
        error: None,
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(super::resource("/").route(web::get().to(list)))
        .service(super::resource("/upload/").route(web::post().to(upload)))
        .service(
            super::resource("/delete/")
                .route(web::get().to(delete_all))
                .route(web::delete().to(delete_all)),
        );
}
