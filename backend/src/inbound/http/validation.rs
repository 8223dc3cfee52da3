//! Translation of schema and extractor failures into API errors.

use actix_web::error::{JsonPayloadError, QueryPayloadError};
use actix_web::{HttpRequest, web};
use serde_json::{Value, json};
use tracing::debug;

use crate::domain::{Error, StudentSchemaError};

/// Report every offending field of a schema failure.
///
/// The payload lists `{field, code, message}` entries under `details.fields`
/// in the order the fields were checked.
pub(crate) fn schema_error(error: &StudentSchemaError) -> Error {
    let fields: Vec<Value> = error
        .violations()
        .iter()
        .map(|violation| {
            json!({
                "field": violation.field.as_str(),
                "code": violation.kind.code(),
                "message": violation.to_string(),
            })
        })
        .collect();
    Error::validation_failed(error.to_string()).with_details(json!({ "fields": fields }))
}

/// Body that could not be parsed into the request shape at all.
fn malformed_body_error(error: &JsonPayloadError) -> Error {
    debug!(%error, "rejected malformed JSON body");
    let message = match error {
        JsonPayloadError::ContentType => "request body must be application/json".to_owned(),
        JsonPayloadError::Deserialize(inner) => format!("request body is not valid: {inner}"),
        other => format!("request body could not be read: {other}"),
    };
    Error::validation_failed(message).with_details(json!({ "fields": [] }))
}

/// JSON extractor configuration shared by the student endpoints.
pub(crate) fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req: &HttpRequest| malformed_body_error(&err).into())
}

/// Query extractor configuration: unparseable parameters are bad requests.
pub(crate) fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err: QueryPayloadError, _req: &HttpRequest| {
        debug!(error = %err, "rejected malformed query string");
        Error::invalid_request(format!("invalid query parameters: {err}")).into()
    })
}
