use actix_web::{web, HttpRequest, Resource};

use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::middleware::TokenGuard;

pub mod auth;
pub mod ble_data;
pub mod health;
pub mod users;

/// Register every route. Shared by `main.rs` and the integration tests so
/// both see the same paths and guards.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::configure_routes)
        .configure(auth::configure_routes)
        .configure(users::configure_routes)
        .service(
            web::scope("/api/data")
                .wrap(TokenGuard)
                .configure(ble_data::configure_routes),
        );
}

/// JSON 404 for anything no route claims.
pub async fn not_found(req: HttpRequest) -> Result<&'static str, AppError> {
    Err(AppError::not_found(
        ErrorCode::NotFound,
        format!("No route for {} {}", req.method(), req.path()),
    ))
}

/// JSON 405 for a known path hit with a method it does not serve.
pub async fn method_not_allowed(req: HttpRequest) -> Result<&'static str, AppError> {
    Err(AppError::method_not_allowed(format!(
        "{} is not supported on {}",
        req.method(),
        req.path()
    )))
}

/// `web::resource` whose unmatched methods answer with [`method_not_allowed`].
pub(crate) fn resource(path: &str) -> Resource {
    web::resource(path).default_service(web::to(method_not_allowed))
}
