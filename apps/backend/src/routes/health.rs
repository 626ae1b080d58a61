use actix_web::{web, HttpResponse};
use migration::get_latest_migration_version;
use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};
use serde::Serialize;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use crate::auth::revocation::RevocationSet;
use crate::error::AppError;
use crate::state::app_state::AppState;

pub async fn root() -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().body("Hello world"))
}

#[derive(Debug, Serialize)]
struct DbReport {
    /// `ok`, `unreachable` or `absent`
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    latest_migration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl DbReport {
    async fn check(db: Option<&DatabaseConnection>) -> Self {
        let Some(db) = db else {
            return Self {
                status: "absent",
                latest_migration: None,
                error: None,
            };
        };

        let ping = Statement::from_string(db.get_database_backend(), "SELECT 1".to_string());
        if let Err(e) = db.query_one(ping).await {
            return Self {
                status: "unreachable",
                latest_migration: None,
                error: Some(e.to_string()),
            };
        }

        Self {
            status: "ok",
            latest_migration: get_latest_migration_version(db).await.ok().flatten(),
            error: None,
        }
    }
}

/// Logged-out tokens still held in memory. Without pruning this only grows.
#[derive(Debug, Serialize)]
struct RevocationReport {
    tracked: usize,
}

impl From<&RevocationSet> for RevocationReport {
    fn from(set: &RevocationSet) -> Self {
        Self { tracked: set.len() }
    }
}

#[derive(Debug, Serialize)]
struct HealthReport {
    /// `ok` when the database answers, `degraded` otherwise
    status: &'static str,
    version: &'static str,
    time: String,
    db: DbReport,
    revocations: RevocationReport,
    error: Option<()>,
}

async fn health(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let db = DbReport::check(app_state.db.as_ref()).await;

    let report = HealthReport {
        status: if db.status == "ok" { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        time: OffsetDateTime::now_utc()
            .format(&Rfc3339)
            .unwrap_or_else(|_| "unknown".to_string()),
        db,
        revocations: RevocationReport::from(&app_state.revocations),
        error: None,
    };

    Ok(HttpResponse::Ok().json(report))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(super::resource("/").route(web::get().to(root)))
        .service(super::resource("/health").route(web::get().to(health)));
}
