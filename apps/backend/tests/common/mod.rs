#![allow(dead_code)]

use actix_web::body::BoxBody;
use actix_web::dev::ServiceResponse;
use actix_web::test;
use serde_json::Value;

// Logging is auto-installed for every test binary that declares `mod common`.
#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

/// Read a success body and check it carries `"error": null`.
pub async fn read_ok_json(resp: ServiceResponse<BoxBody>) -> Value {
    assert!(
        resp.headers().contains_key("x-request-id"),
        "x-request-id header should be present"
    );
    let json: Value = test::read_body_json(resp).await;
    assert!(json["error"].is_null(), "success body must carry error: null, got {json}");
    json
}
