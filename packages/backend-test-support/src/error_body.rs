//! Assertions for the backend's JSON error envelope:
//! `{"error": <detail>, "response": null, "code": <CODE>, "trace_id": <id>}`
//! plus an `x-trace-id` header equal to the body's `trace_id`.

use actix_web::body::BoxBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::StatusCode;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: String,
    response: Option<serde_json::Value>,
    code: String,
    trace_id: String,
}

/// Consume `resp` and check status, code, envelope shape and trace-id parity.
/// Returns the human-readable `error` detail for further checks.
pub async fn assert_error_body(
    resp: ServiceResponse<BoxBody>,
    expected_status: StatusCode,
    expected_code: &str,
) -> String {
    assert_eq!(resp.status(), expected_status, "unexpected status");

    let header_trace_id = resp
        .headers()
        .get("x-trace-id")
        .expect("x-trace-id header should be present")
        .to_str()
        .expect("x-trace-id should be ASCII")
        .to_string();

    let body = actix_web::test::read_body(resp).await;
    let envelope: ErrorEnvelope =
        serde_json::from_slice(&body).expect("error body should be the JSON envelope");

    assert_eq!(envelope.code, expected_code);
    assert!(envelope.response.is_none(), "response must be null on errors");
    assert!(!envelope.error.is_empty(), "error detail must not be empty");
    assert_eq!(envelope.trace_id, header_trace_id);

    envelope.error
}
