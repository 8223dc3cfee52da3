//! HTTP adapter mapping for domain errors.
//!
//! Keeps the domain error type HTTP-agnostic while letting Actix handlers
//! turn failures into consistent JSON bodies and status codes.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use tracing::error;

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

const REDACTED_MESSAGE: &str = "Internal server error";

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::ValidationFailed => StatusCode::UNPROCESSABLE_ENTITY,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::UpstreamFailure => StatusCode::BAD_GATEWAY,
        ErrorCode::UpstreamTimeout => StatusCode::GATEWAY_TIMEOUT,
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn redact_if_internal(source: &Error) -> Error {
    if !matches!(source.code(), ErrorCode::InternalError) {
        return source.clone();
    }
    error!(
        message = source.message(),
        trace_id = source.trace_id(),
        "internal error redacted from response"
    );
    let redacted = Error::internal(REDACTED_MESSAGE);
    match source.trace_id() {
        Some(id) => redacted.with_trace_id(id.to_owned()),
        None => redacted,
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }
        builder.json(redact_if_internal(self))
    }
}

impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        error!(error = %err, "actix error promoted to domain error");
        Error::internal(REDACTED_MESSAGE)
    }
}

#[cfg(test)]
mod tests;
