use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::assert_error_body;

use crate::common::read_ok_json;
use crate::support::{create_test_app, seed_user, test_state, TOKEN_HEADER};

#[actix_web::test]
async fn list_users_hides_password_hashes() {
    let state = test_state().await;
    let a = seed_user(&state, "list").await;
    let b = seed_user(&state, "list").await;
    let app = create_test_app(state).await;

    let req = test::TestRequest::get()
        .uri("/users")
        .insert_header((TOKEN_HEADER, a.token.clone()))
        .to_request();
    let body = read_ok_json(test::call_service(&app, req).await).await;

    let users = body["users"].as_array().expect("users array");
    assert_eq!(users.len(), 2);
    assert_eq!(users[0]["id"], a.user.id);
    assert_eq!(users[1]["public_id"], b.user.public_id.as_str());
    assert_eq!(users[1]["email"], b.user.email.as_str());
    assert!(users.iter().all(|u| u.get("password_hash").is_none()));
}

#[actix_web::test]
async fn single_user_lookup_by_id() {
    let state = test_state().await;
    let a = seed_user(&state, "one").await;
    let app = create_test_app(state).await;

    let get = |uri: String| {
        test::TestRequest::get()
            .uri(&uri)
            .insert_header((TOKEN_HEADER, a.token.clone()))
            .to_request()
    };

    let body = read_ok_json(test::call_service(&app, get(format!("/users?id={}", a.user.id))).await).await;
    assert_eq!(body["username"], a.user.username.as_str());
    assert_eq!(body["id"], a.user.id);

    let resp = test::call_service(&app, get("/users?id=abc".into())).await;
    assert_error_body(resp, StatusCode::BAD_REQUEST, "INVALID_USER_ID").await;

    let resp = test::call_service(&app, get("/users?id=999999".into())).await;
    assert_error_body(resp, StatusCode::NOT_FOUND, "USER_NOT_FOUND").await;
}

#[actix_web::test]
async fn delete_user_validates_id() {
    let state = test_state().await;
    let a = seed_user(&state, "del").await;
    let app = create_test_app(state).await;

    for uri in ["/users/delete", "/users/delete?id=-3", "/users/delete?id=x"] {
        let req = test::TestRequest::delete()
            .uri(uri)
            .insert_header((TOKEN_HEADER, a.token.clone()))
            .to_request();
        let resp = test::call_service(&app, req).await;
        let detail = assert_error_body(resp, StatusCode::BAD_REQUEST, "INVALID_USER_ID").await;
        assert_eq!(detail, "Wrong user id");
    }

    let req = test::TestRequest::delete()
        .uri("/users/delete?id=424242")
        .insert_header((TOKEN_HEADER, a.token.clone()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_error_body(resp, StatusCode::NOT_FOUND, "USER_NOT_FOUND").await;
}

#[actix_web::test]
async fn deleting_another_user_keeps_the_caller_logged_in() {
    let state = test_state().await;
    let a = seed_user(&state, "del").await;
    let b = seed_user(&state, "del").await;
    let app = create_test_app(state.clone()).await;

    let req = test::TestRequest::delete()
        .uri(&format!("/users/delete?id={}", b.user.id))
        .insert_header((TOKEN_HEADER, a.token.clone()))
        .to_request();
    let body = read_ok_json(test::call_service(&app, req).await).await;
    assert_eq!(body["response"], "Successfully deleted user");
    assert!(!state.revocations.is_revoked(&a.token));

    // The deleted user's token no longer resolves to anyone.
    let req = test::TestRequest::get()
        .uri("/users")
        .insert_header((TOKEN_HEADER, b.token.clone()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_error_body(resp, StatusCode::UNAUTHORIZED, "INVALID_TOKEN").await;

    let req = test::TestRequest::get()
        .uri("/users")
        .insert_header((TOKEN_HEADER, a.token.clone()))
        .to_request();
    let body = read_ok_json(test::call_service(&app, req).await).await;
    assert_eq!(body["users"].as_array().unwrap().len(), 1);
}

#[actix_web::test]
async fn deleting_yourself_revokes_your_token() {
    let state = test_state().await;
    let a = seed_user(&state, "self").await;
    let app = create_test_app(state.clone()).await;

    let req = test::TestRequest::delete()
        .uri(&format!("/users/delete?id={}", a.user.id))
        .insert_header((TOKEN_HEADER, a.token.clone()))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
    assert!(state.revocations.is_revoked(&a.token));

    let req = test::TestRequest::get()
        .uri("/users")
        .insert_header((TOKEN_HEADER, a.token.clone()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_error_body(resp, StatusCode::UNAUTHORIZED, "TOKEN_REVOKED").await;
}

#[actix_web::test]
async fn wrong_method_on_a_guarded_resource_is_a_json_405() {
    let state = test_state().await;
    let a = seed_user(&state, "method").await;
    let app = create_test_app(state).await;

    let req = test::TestRequest::get()
        .uri(&format!("/users/delete?id={}", a.user.id))
        .insert_header((TOKEN_HEADER, a.token.clone()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_error_body(resp, StatusCode::METHOD_NOT_ALLOWED, "METHOD_NOT_ALLOWED").await;

    // The user is still there.
    let req = test::TestRequest::get()
        .uri(&format!("/users?id={}", a.user.id))
        .insert_header((TOKEN_HEADER, a.token.clone()))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
}
