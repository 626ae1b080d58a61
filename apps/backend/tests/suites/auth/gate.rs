use std::time::Duration;

use actix_web::http::StatusCode;
use actix_web::test;
use backend::state::security_config::SecurityConfig;
use backend_test_support::assert_error_body;

use crate::support::{create_test_app, mint_token_at, seed_user, test_state, TOKEN_HEADER};

const PROTECTED: [(&str, &str); 6] = [
    ("GET", "/users"),
    ("DELETE", "/users/delete?id=1"),
    ("DELETE", "/logout"),
    ("GET", "/api/data/"),
    ("POST", "/api/data/upload/"),
    ("GET", "/api/data/delete/"),
];

fn request(method: &str, uri: &str) -> test::TestRequest {
    match method {
        "GET" => test::TestRequest::get(),
        "POST" => test::TestRequest::post(),
        "DELETE" => test::TestRequest::delete(),
        other => panic!("unexpected method {other}"),
    }
    .uri(uri)
}

#[actix_web::test]
async fn every_protected_route_requires_a_token() {
    let state = test_state().await;
    let app = create_test_app(state).await;

    for (method, uri) in PROTECTED {
        let resp = test::call_service(&app, request(method, uri).to_request()).await;
        assert_error_body(resp, StatusCode::UNAUTHORIZED, "MISSING_TOKEN").await;
    }
}

#[actix_web::test]
async fn empty_header_is_missing_token() {
    let state = test_state().await;
    let app = create_test_app(state).await;

    let req = test::TestRequest::get()
        .uri("/users")
        .insert_header((TOKEN_HEADER, ""))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_error_body(resp, StatusCode::UNAUTHORIZED, "MISSING_TOKEN").await;
}

#[actix_web::test]
async fn garbage_token_is_invalid() {
    let state = test_state().await;
    let app = create_test_app(state).await;

    let req = test::TestRequest::get()
        .uri("/users")
        .insert_header((TOKEN_HEADER, "not.a.jwt"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_error_body(resp, StatusCode::UNAUTHORIZED, "INVALID_TOKEN").await;
}

#[actix_web::test]
async fn token_signed_with_another_secret_is_invalid() {
    let state = test_state().await;
    let seeded = seed_user(&state, "gate").await;
    let app = create_test_app(state).await;

    let foreign = SecurityConfig::new("some-other-secret");
    let token = mint_token_at(&seeded.user.public_id, Duration::ZERO, &foreign);

    let req = test::TestRequest::get()
        .uri("/users")
        .insert_header((TOKEN_HEADER, token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_error_body(resp, StatusCode::UNAUTHORIZED, "INVALID_TOKEN").await;
}

#[actix_web::test]
async fn expired_token_is_rejected() {
    let state = test_state().await;
    let seeded = seed_user(&state, "gate").await;
    let ttl = state.security.token_ttl;
    let token = mint_token_at(&seeded.user.public_id, ttl + Duration::from_secs(5), &state.security);
    let app = create_test_app(state).await;

    let req = test::TestRequest::get()
        .uri("/users")
        .insert_header((TOKEN_HEADER, token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_error_body(resp, StatusCode::UNAUTHORIZED, "TOKEN_EXPIRED").await;
}

#[actix_web::test]
async fn token_for_unknown_user_is_invalid() {
    let state = test_state().await;
    let token = mint_token_at("no-such-public-id", Duration::ZERO, &state.security);
    let app = create_test_app(state).await;

    let req = test::TestRequest::get()
        .uri("/api/data/")
        .insert_header((TOKEN_HEADER, token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_error_body(resp, StatusCode::UNAUTHORIZED, "INVALID_TOKEN").await;
}

#[actix_web::test]
async fn revocation_is_checked_before_expiry() {
    let state = test_state().await;
    let seeded = seed_user(&state, "gate").await;
    let ttl = state.security.token_ttl;
    let stale = mint_token_at(&seeded.user.public_id, ttl * 2, &state.security);
    state.revocations.revoke(stale.clone(), 0);
    let app = create_test_app(state).await;

    let req = test::TestRequest::get()
        .uri("/users")
        .insert_header((TOKEN_HEADER, stale))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_error_body(resp, StatusCode::UNAUTHORIZED, "TOKEN_REVOKED").await;
}

#[actix_web::test]
async fn valid_token_reaches_the_handler() {
    let state = test_state().await;
    let seeded = seed_user(&state, "gate").await;
    let app = create_test_app(state).await;

    let req = test::TestRequest::get()
        .uri("/users")
        .insert_header((TOKEN_HEADER, seeded.token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}
