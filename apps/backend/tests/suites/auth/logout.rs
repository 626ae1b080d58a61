use std::time::Duration;

use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::assert_error_body;

use crate::common::read_ok_json;
use crate::support::{create_test_app, mint_token_at, seed_user, test_state, TOKEN_HEADER};

#[actix_web::test]
async fn logout_revokes_only_the_presented_token() {
    let state = test_state().await;
    let seeded = seed_user(&state, "logout").await;
    // Issued a second earlier, so the string differs from `seeded.token`.
    let other = mint_token_at(&seeded.user.public_id, Duration::from_secs(1), &state.security);
    let app = create_test_app(state.clone()).await;

    let req = test::TestRequest::delete()
        .uri("/logout")
        .insert_header((TOKEN_HEADER, seeded.token.clone()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = read_ok_json(resp).await;
    assert_eq!(body["response"], "Successfully logged out");
    assert!(state.revocations.is_revoked(&seeded.token));

    for _ in 0..2 {
        let req = test::TestRequest::get()
            .uri("/users")
            .insert_header((TOKEN_HEADER, seeded.token.clone()))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_error_body(resp, StatusCode::UNAUTHORIZED, "TOKEN_REVOKED").await;
    }

    let req = test::TestRequest::get()
        .uri("/users")
        .insert_header((TOKEN_HEADER, other))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
}

#[actix_web::test]
async fn second_logout_with_same_token_is_revoked() {
    let state = test_state().await;
    let seeded = seed_user(&state, "logout").await;
    let app = create_test_app(state).await;

    let logout = || {
        test::TestRequest::delete()
            .uri("/logout")
            .insert_header((TOKEN_HEADER, seeded.token.clone()))
            .to_request()
    };

    assert_eq!(
        test::call_service(&app, logout()).await.status(),
        StatusCode::OK
    );
    let resp = test::call_service(&app, logout()).await;
    assert_error_body(resp, StatusCode::UNAUTHORIZED, "TOKEN_REVOKED").await;
}
