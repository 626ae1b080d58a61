use actix_web::http::StatusCode;
use actix_web::test;
use backend::auth::jwt::decode_access_token;
use backend_test_support::assert_error_body;
use serde_json::json;

use crate::common::read_ok_json;
use crate::support::{create_test_app, seed_user, test_state, TOKEN_HEADER};

#[actix_web::test]
async fn form_login_returns_a_working_token() {
    let state = test_state().await;
    let seeded = seed_user(&state, "login").await;
    let app = create_test_app(state.clone()).await;

    let req = test::TestRequest::post()
        .uri("/login")
        .set_form([
            ("email", seeded.user.email.as_str()),
            ("password", seeded.password.as_str()),
        ])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body = read_ok_json(resp).await;
    assert_eq!(body["username"], seeded.user.username.as_str());
    assert_eq!(body["email"], seeded.user.email.as_str());

    let token = body["token"].as_str().expect("token should be a string");
    let claims = decode_access_token(token, &state.security).unwrap();
    assert_eq!(claims.public_id, seeded.user.public_id);
    assert_eq!(
        claims.exp - claims.iat,
        state.security.token_ttl.as_secs() as i64
    );

    let req = test::TestRequest::get()
        .uri("/users")
        .insert_header((TOKEN_HEADER, token))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
}

#[actix_web::test]
async fn json_login_is_accepted() {
    let state = test_state().await;
    let seeded = seed_user(&state, "login").await;
    let app = create_test_app(state).await;

    let req = test::TestRequest::post()
        .uri("/login")
        .set_json(json!({ "email": seeded.user.email, "password": seeded.password }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
}

#[actix_web::test]
async fn missing_password_is_bad_request() {
    let state = test_state().await;
    let seeded = seed_user(&state, "login").await;
    let app = create_test_app(state).await;

    let req = test::TestRequest::post()
        .uri("/login")
        .set_form([("email", seeded.user.email.as_str())])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_error_body(resp, StatusCode::BAD_REQUEST, "MISSING_FIELDS").await;
}

#[actix_web::test]
async fn unknown_email_is_unauthorized() {
    let state = test_state().await;
    let app = create_test_app(state).await;

    let req = test::TestRequest::post()
        .uri("/login")
        .set_form([("email", "ghost@example.test"), ("password", "pw")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_error_body(resp, StatusCode::UNAUTHORIZED, "USER_DOES_NOT_EXIST").await;
}

#[actix_web::test]
async fn wrong_password_is_forbidden() {
    let state = test_state().await;
    let seeded = seed_user(&state, "login").await;
    let app = create_test_app(state).await;

    let req = test::TestRequest::post()
        .uri("/login")
        .set_form([
            ("email", seeded.user.email.as_str()),
            ("password", "definitely-wrong"),
        ])
        .to_request();
    let resp = test::call_service(&app, req).await;
    let detail = assert_error_body(resp, StatusCode::FORBIDDEN, "WRONG_PASSWORD").await;
    assert_eq!(detail, "Wrong password");
}
