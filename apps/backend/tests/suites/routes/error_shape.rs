use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::assert_error_body;

use crate::support::{create_test_app, test_state};

#[actix_web::test]
async fn unknown_route_is_a_json_404() {
    let app = create_test_app(test_state().await).await;

    let req = test::TestRequest::get().uri("/nope").to_request();
    let resp = test::call_service(&app, req).await;

    let request_id = resp
        .headers()
        .get("x-request-id")
        .expect("x-request-id header")
        .to_str()
        .unwrap()
        .to_string();
    let trace_id = resp
        .headers()
        .get("x-trace-id")
        .expect("x-trace-id header")
        .to_str()
        .unwrap()
        .to_string();
    assert_eq!(request_id, trace_id);

    let detail = assert_error_body(resp, StatusCode::NOT_FOUND, "NOT_FOUND").await;
    assert!(detail.contains("/nope"));
}

#[actix_web::test]
async fn rejected_tokens_share_the_request_trace_id() {
    let app = create_test_app(test_state().await).await;

    let req = test::TestRequest::get().uri("/api/data/").to_request();
    let resp = test::call_service(&app, req).await;

    let request_id = resp.headers().get("x-request-id").cloned().unwrap();
    assert_eq!(resp.headers().get("x-trace-id"), Some(&request_id));
    assert_error_body(resp, StatusCode::UNAUTHORIZED, "MISSING_TOKEN").await;
}

#[actix_web::test]
async fn each_request_gets_a_fresh_trace_id() {
    let app = create_test_app(test_state().await).await;

    let mut seen = std::collections::HashSet::new();
    for _ in 0..3 {
        let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        let id = resp.headers().get("x-request-id").unwrap().to_str().unwrap().to_string();
        assert!(seen.insert(id));
    }
}
