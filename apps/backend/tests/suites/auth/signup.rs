use actix_web::http::StatusCode;
use actix_web::test;
use backend::repos::users;
use backend_test_support::{assert_error_body, unique_email};
use serde_json::json;

use crate::common::read_ok_json;
use crate::support::{create_test_app, test_state};

#[actix_web::test]
async fn signup_creates_an_account_that_can_log_in() {
    let state = test_state().await;
    let app = create_test_app(state.clone()).await;
    let email = unique_email("signup");

    let req = test::TestRequest::post()
        .uri("/signup")
        .set_form([
            ("username", "ada"),
            ("email", email.as_str()),
            ("password", "lovelace"),
        ])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = read_ok_json(resp).await;
    assert_eq!(body["response"], "Successfully registered");

    let db = state.require_db().unwrap();
    let stored = users::find_by_email(db, &email).await.unwrap().unwrap();
    assert_eq!(stored.username, "ada");
    assert_ne!(stored.password_hash, "lovelace");
    assert!(uuid::Uuid::parse_str(&stored.public_id).is_ok());

    let req = test::TestRequest::post()
        .uri("/login")
        .set_json(json!({ "email": email, "password": "lovelace" }))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::CREATED
    );
}

#[actix_web::test]
async fn duplicate_email_is_rejected_without_second_record() {
    let state = test_state().await;
    let app = create_test_app(state.clone()).await;
    let email = unique_email("dup");

    for (i, expected) in [StatusCode::CREATED, StatusCode::CONFLICT]
        .into_iter()
        .enumerate()
    {
        let req = test::TestRequest::post()
            .uri("/signup")
            .set_json(json!({ "username": format!("dup{i}"), "email": email, "password": "pw" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        if expected == StatusCode::CONFLICT {
            assert_error_body(resp, expected, "USER_EXISTS").await;
        } else {
            assert_eq!(resp.status(), expected);
        }
    }

    let db = state.require_db().unwrap();
    let all = users::list_all(db).await.unwrap();
    assert_eq!(all.iter().filter(|u| u.email == email).count(), 1);
    assert_eq!(all[0].username, "dup0");
}

#[actix_web::test]
async fn missing_fields_create_nothing() {
    let state = test_state().await;
    let app = create_test_app(state.clone()).await;

    let bodies = [
        vec![("email", "a@example.test"), ("password", "pw")],
        vec![("username", "a"), ("password", "pw")],
        vec![("username", "a"), ("email", "a@example.test")],
        vec![("username", " "), ("email", "a@example.test"), ("password", "pw")],
    ];

    for form in bodies {
        let req = test::TestRequest::post()
            .uri("/signup")
            .set_form(form)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_error_body(resp, StatusCode::BAD_REQUEST, "MISSING_FIELDS").await;
    }

    let db = state.require_db().unwrap();
    assert!(users::list_all(db).await.unwrap().is_empty());
}
