use std::future::Future;
use std::time::Duration;

use migration::{migrate, MigrationCommand};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::{info, warn};

use crate::config::db::{db_url, DbKind};
use crate::error::AppError;

const CONNECT_ATTEMPTS: u32 = 5;
const CONNECT_INTERVAL_MS: u64 = 500;

fn db_engine(kind: DbKind) -> &'static str {
    match kind {
        DbKind::Postgres => "postgresql",
        DbKind::SqliteFile | DbKind::SqliteMemory => "sqlite",
    }
}

/// Retry a connection attempt with fixed interval delays.
async fn retry_connection<T, F, Fut>(
    mut connect_fn: F,
    max_attempts: u32,
    interval_ms: u64,
) -> Result<T, AppError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, AppError>>,
{
    let mut attempt = 1;
    loop {
        match connect_fn().await {
            Ok(result) => {
                if attempt > 1 {
                    info!(attempts = attempt, "connection_retry=success");
                }
                return Ok(result);
            }
            Err(e) if attempt >= max_attempts => return Err(e),
            Err(_) => {
                warn!(
                    attempt,
                    max_attempts, interval_ms, "connection_retry=failed"
                );
                tokio::time::sleep(Duration::from_millis(interval_ms)).await;
                attempt += 1;
            }
        }
    }
}

fn connect_options(kind: DbKind, url: String) -> ConnectOptions {
    let mut opt = ConnectOptions::new(url);
    opt.sqlx_logging(false);
    match kind {
        // Each sqlite::memory: connection is a separate database, so the pool
        // must hold exactly one connection and never recycle it.
        DbKind::SqliteMemory => {
            opt.max_connections(1)
                .min_connections(1)
                .max_lifetime(Duration::from_secs(60 * 60 * 24 * 365));
        }
        DbKind::SqliteFile => {
            opt.max_connections(4);
        }
        DbKind::Postgres => {
            opt.max_connections(16)
                .connect_timeout(Duration::from_secs(5));
        }
    }
    opt
}

/// Open a pool for `kind`. Does NOT run migrations.
pub async fn connect_db(kind: DbKind) -> Result<DatabaseConnection, AppError> {
    let url = db_url(kind)?;
    let attempts = if kind == DbKind::Postgres {
        CONNECT_ATTEMPTS
    } else {
        1
    };

    let conn = retry_connection(
        || {
            let opt = connect_options(kind, url.clone());
            async move { Database::connect(opt).await.map_err(AppError::from) }
        },
        attempts,
        CONNECT_INTERVAL_MS,
    )
    .await?;

    info!(engine = db_engine(kind), "database connected");
    Ok(conn)
}

/// Connect and bring the schema up to date.
pub async fn bootstrap_db(kind: DbKind) -> Result<DatabaseConnection, AppError> {
    let conn = connect_db(kind).await?;
    migrate(&conn, MigrationCommand::Up)
        .await
        .map_err(|e| AppError::config(format!("migration failed: {e}")))?;
    Ok(conn)
}
