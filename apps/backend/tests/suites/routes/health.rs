use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::assert_error_body;

use crate::common::read_ok_json;
use crate::support::{create_test_app, test_state};

#[actix_web::test]
async fn root_says_hello() {
    let app = create_test_app(test_state().await).await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(test::read_body(resp).await, "Hello world");
}

#[actix_web::test]
async fn health_reports_db_and_revocations() {
    let state = test_state().await;
    state.revocations.revoke("tok", i64::MAX);
    let app = create_test_app(state).await;

    let resp =
        test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = read_ok_json(resp).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["db"]["status"], "ok");
    assert_eq!(body["db"]["latest_migration"], "m20250901_000001_init");
    assert!(body["db"].get("error").is_none());
    assert_eq!(body["revocations"]["tracked"], 1);
}

#[actix_web::test]
async fn wrong_method_is_a_json_405() {
    let app = create_test_app(test_state().await).await;

    let req = test::TestRequest::post().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    let detail = assert_error_body(resp, StatusCode::METHOD_NOT_ALLOWED, "METHOD_NOT_ALLOWED").await;
    assert!(detail.contains("POST"));
}
