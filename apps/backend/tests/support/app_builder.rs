use actix_http::Request;
use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{test, web, App, Error};
use backend::config::db::DbKind;
use backend::infra::state::build_state;
use backend::middleware::{RequestTrace, StructuredLogger, TraceSpan};
use backend::routes;
use backend::state::app_state::AppState;
use backend::state::security_config::SecurityConfig;

/// Fresh in-memory SQLite state with migrations applied and an empty
/// revocation set.
pub async fn test_state() -> web::Data<AppState> {
    let state = build_state()
        .with_db(DbKind::SqliteMemory)
        .with_security(SecurityConfig::for_tests())
        .build()
        .await
        .expect("in-memory state should build");
    web::Data::new(state)
}

/// The production route table and middleware stack, minus CORS.
pub async fn create_test_app(
    data: web::Data<AppState>,
) -> impl Service<Request, Response = ServiceResponse<BoxBody>, Error = Error> {
    test::init_service(
        App::new()
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(data)
            .configure(routes::configure)
            .default_service(web::to(routes::not_found)),
    )
    .await
}
