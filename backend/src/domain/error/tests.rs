//! Tests for domain error construction and serialisation.

use super::*;
use rstest::{fixture, rstest};
use serde_json::json;
use uuid::Uuid;

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[fixture]
fn base_error() -> Error {
    Error::not_found("Student 65f0c0ffee0000000000beef not found")
}

#[rstest]
#[case(Error::invalid_request("bad"), ErrorCode::InvalidRequest)]
#[case(Error::validation_failed("bad"), ErrorCode::ValidationFailed)]
#[case(Error::not_found("missing"), ErrorCode::NotFound)]
#[case(Error::upstream_failure("down"), ErrorCode::UpstreamFailure)]
#[case(Error::upstream_timeout("slow"), ErrorCode::UpstreamTimeout)]
#[case(Error::service_unavailable("store"), ErrorCode::ServiceUnavailable)]
#[case(Error::internal("boom"), ErrorCode::InternalError)]
fn constructors_set_code(#[case] error: Error, #[case] expected: ErrorCode) {
    assert_eq!(error.code(), expected);
}

#[rstest]
fn try_new_rejects_empty_messages() {
    let result = Error::try_new(ErrorCode::InvalidRequest, "   ");
    assert!(matches!(result, Err(ErrorValidationError::EmptyMessage)));
}

#[rstest]
fn try_with_trace_id_rejects_empty_values(base_error: Error) {
    let result = base_error.try_with_trace_id("  ");
    assert!(matches!(result, Err(ErrorValidationError::EmptyTraceId)));
}

#[rstest]
fn trace_id_is_absent_out_of_scope(base_error: Error) {
    assert!(base_error.trace_id().is_none());
}

#[tokio::test]
async fn new_captures_scoped_trace_id() {
    let trace_id = TraceId::from_uuid(Uuid::nil());
    let error = TraceId::scope(trace_id, async { Error::internal("boom") }).await;
    assert_eq!(error.trace_id(), Some(TRACE_ID));
}

#[rstest]
fn serialises_camel_case_and_skips_empty_fields(base_error: Error) {
    let value = serde_json::to_value(&base_error).expect("error serialises");
    assert_eq!(
        value,
        json!({
            "code": "not_found",
            "message": "Student 65f0c0ffee0000000000beef not found",
        })
    );
}

#[rstest]
fn deserialises_snake_case_trace_id_alias() {
    let error: Error = serde_json::from_value(json!({
        "code": "validation_failed",
        "message": "invalid student record",
        "trace_id": TRACE_ID,
        "details": { "fields": [] },
    }))
    .expect("error deserialises");

    assert_eq!(error.code(), ErrorCode::ValidationFailed);
    assert_eq!(error.trace_id(), Some(TRACE_ID));
    assert!(error.details().is_some());
}
