//! Tests for HTTP error mapping.

use super::*;
use actix_web::body::to_bytes;
use rstest::{fixture, rstest};
use serde_json::{Value, json};

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[fixture]
fn internal_error() -> Error {
    Error::internal("connection string leaked: mongodb://user:pw@db")
        .with_trace_id(TRACE_ID)
        .with_details(json!({ "secret": "x" }))
}

async fn body_json(error: &Error) -> Value {
    let response = ResponseError::error_response(error);
    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    serde_json::from_slice(&bytes).expect("error body is JSON")
}

#[rstest]
#[case(Error::invalid_request("bad date"), StatusCode::BAD_REQUEST)]
#[case(Error::validation_failed("bad record"), StatusCode::UNPROCESSABLE_ENTITY)]
#[case(Error::not_found("missing"), StatusCode::NOT_FOUND)]
#[case(Error::upstream_failure("wttr.in down"), StatusCode::BAD_GATEWAY)]
#[case(Error::upstream_timeout("slow"), StatusCode::GATEWAY_TIMEOUT)]
#[case(Error::service_unavailable("store down"), StatusCode::SERVICE_UNAVAILABLE)]
#[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
fn status_code_matches_error_code(#[case] error: Error, #[case] expected: StatusCode) {
    assert_eq!(ResponseError::status_code(&error), expected);
}

#[rstest]
#[actix_web::test]
async fn internal_errors_are_redacted_but_keep_trace_id(internal_error: Error) {
    let response = ResponseError::error_response(&internal_error);
    let header = response
        .headers()
        .get(TRACE_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    assert_eq!(header.as_deref(), Some(TRACE_ID));

    let body = body_json(&internal_error).await;
    assert_eq!(body["code"], "internal_error");
    assert_eq!(body["message"], "Internal server error");
    assert_eq!(body["traceId"], TRACE_ID);
    assert!(body.get("details").is_none());
}

#[rstest]
#[actix_web::test]
async fn client_errors_keep_message_and_details() {
    let error = Error::validation_failed("invalid student record: gpa")
        .with_details(json!({ "fields": [{ "field": "gpa" }] }));

    let response = ResponseError::error_response(&error);
    assert!(response.headers().get(TRACE_ID_HEADER).is_none());

    let body = body_json(&error).await;
    assert_eq!(body["message"], "invalid student record: gpa");
    assert_eq!(body["details"]["fields"][0]["field"], "gpa");
}

#[rstest]
fn actix_errors_become_internal() {
    let actix = actix_web::error::ErrorBadRequest("raw parser detail");
    let error = Error::from(actix);
    assert_eq!(error.code(), ErrorCode::InternalError);
    assert_eq!(error.message(), "Internal server error");
}
