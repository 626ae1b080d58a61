use std::time::{Duration, SystemTime};

use actix_web::{web, App, HttpServer};
use backend::auth::jwt::unix_seconds;
use backend::auth::revocation::RevocationSet;
use backend::config::db::DbKind;
use backend::infra::state::build_state;
use backend::middleware::{cors_middleware, RequestTrace, StructuredLogger, TraceSpan};
use backend::routes;
use backend::state::security_config::SecurityConfig;
use tracing::{error, info, warn};

mod telemetry;

/// Periodically drop revocation entries whose token has expired anyway.
fn spawn_revocation_pruner(revocations: RevocationSet, every: Duration) {
    actix_web::rt::spawn(async move {
        let mut ticker = actix_web::rt::time::interval(every);
        loop {
            ticker.tick().await;
            match unix_seconds(SystemTime::now()) {
                Ok(now) => {
                    let removed = revocations.prune_expired(now);
                    if removed > 0 {
                        info!(removed, remaining = revocations.len(), "revocation set pruned");
                    }
                }
                Err(e) => warn!(error = %e, "skipping revocation prune"),
            }
        }
    });
}

fn prune_interval() -> Option<Duration> {
    let raw = std::env::var("BACKEND_REVOCATION_PRUNE_SECS").ok()?;
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Some(Duration::from_secs(secs)),
        _ => {
            warn!(value = %raw, "BACKEND_REVOCATION_PRUNE_SECS ignored: not a positive integer");
            None
        }
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment
    // (docker env_file, or sourced manually for local dev).
    let host = std::env::var("BACKEND_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("BACKEND_PORT")
        .unwrap_or_else(|_| "3001".to_string())
        .parse::<u16>()
        .unwrap_or_else(|_| {
            error!("BACKEND_PORT must be a valid port number");
            std::process::exit(1);
        });

    let security_config = SecurityConfig::from_env().unwrap_or_else(|e| {
        error!(error = %e, "invalid security configuration");
        std::process::exit(1);
    });

    let db_kind = DbKind::from_env().unwrap_or_else(|e| {
        error!(error = %e, "invalid BACKEND_DB");
        std::process::exit(1);
    });

    let app_state = match build_state()
        .with_db(db_kind)
        .with_security(security_config)
        .build()
        .await
    {
        Ok(state) => state,
        Err(e) => {
            error!(error = %e, "failed to build application state");
            std::process::exit(1);
        }
    };

    match prune_interval() {
        Some(every) => {
            info!(interval_secs = every.as_secs(), "revocation pruning enabled");
            spawn_revocation_pruner(app_state.revocations.clone(), every);
        }
        None => warn!("revocation pruning disabled; the revocation set grows until restart"),
    }

    info!(%host, port, db = ?db_kind, "starting backend");

    let data = web::Data::new(app_state);

    HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware())
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
            .default_service(web::to(routes::not_found))
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
