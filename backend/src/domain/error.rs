//! Domain-level error type shared by services and adapters.
//!
//! The error is transport agnostic. The HTTP adapter maps [`ErrorCode`] to
//! status codes and serialises the payload as the JSON error body.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::TraceId;

/// Header used to echo the request trace identifier.
pub const TRACE_ID_HEADER: &str = "trace-id";

/// Stable machine-readable error code describing the failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The request is malformed, e.g. conflicting query parameters.
    InvalidRequest,
    /// The request body violates the record schema.
    ValidationFailed,
    /// The requested resource does not exist.
    NotFound,
    /// An upstream API failed or returned an unusable response.
    UpstreamFailure,
    /// An upstream API did not answer in time.
    UpstreamTimeout,
    /// A backing service (the document store) is unreachable.
    ServiceUnavailable,
    /// An unexpected error occurred inside the domain.
    InternalError,
}

/// Validation errors emitted by the fallible constructors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ErrorValidationError {
    #[error("error message must not be empty")]
    EmptyMessage,
    #[error("trace identifier must not be empty")]
    EmptyTraceId,
}

/// Error payload returned by domain services.
///
/// ## Invariants
/// - `message` is non-empty once trimmed of whitespace.
/// - `trace_id`, when present, is non-empty.
///
/// # Examples
/// ```
/// use warehouse::domain::{Error, ErrorCode};
///
/// let err = Error::not_found("Student 65f0c0ffee0000000000beef not found");
/// assert_eq!(err.code(), ErrorCode::NotFound);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct Error {
    code: ErrorCode,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(alias = "trace_id")]
    trace_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<Value>,
}

impl Error {
    /// Create a new error, panicking if the message is blank.
    ///
    /// Captures the current trace identifier if one is in scope.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        match Self::try_new(code, message) {
            Ok(value) => value,
            Err(err) => panic!("error messages must satisfy validation: {err}"),
        }
    }

    /// Fallible constructor that validates the message content.
    pub fn try_new(
        code: ErrorCode,
        message: impl Into<String>,
    ) -> Result<Self, ErrorValidationError> {
        let message = message.into();
        if message.trim().is_empty() {
            return Err(ErrorValidationError::EmptyMessage);
        }
        Ok(Self {
            code,
            message,
            trace_id: TraceId::current().map(|id| id.to_string()),
            details: None,
        })
    }

    /// Stable machine-readable error code.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Correlation identifier captured when the error was created.
    #[must_use]
    pub fn trace_id(&self) -> Option<&str> {
        self.trace_id.as_deref()
    }

    /// Supplementary structured details.
    #[must_use]
    pub fn details(&self) -> Option<&Value> {
        self.details.as_ref()
    }

    /// Attach a trace identifier, panicking if it is blank.
    #[must_use]
    pub fn with_trace_id(self, id: impl Into<String>) -> Self {
        match self.try_with_trace_id(id) {
            Ok(value) => value,
            Err(err) => panic!("trace identifiers must satisfy validation: {err}"),
        }
    }

    /// Fallible variant of [`Error::with_trace_id`].
    pub fn try_with_trace_id(
        mut self,
        id: impl Into<String>,
    ) -> Result<Self, ErrorValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ErrorValidationError::EmptyTraceId);
        }
        self.trace_id = Some(id);
        Ok(self)
    }

    /// Attach structured details to the error.
    ///
    /// # Examples
    /// ```
    /// use warehouse::domain::Error;
    /// use serde_json::json;
    ///
    /// let err = Error::validation_failed("invalid student record")
    ///     .with_details(json!({ "fields": [{ "field": "gpa" }] }));
    /// assert!(err.details().is_some());
    /// ```
    #[must_use]
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Convenience constructor for [`ErrorCode::InvalidRequest`].
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    /// Convenience constructor for [`ErrorCode::ValidationFailed`].
    pub fn validation_failed(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationFailed, message)
    }

    /// Convenience constructor for [`ErrorCode::NotFound`].
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    /// Convenience constructor for [`ErrorCode::UpstreamFailure`].
    pub fn upstream_failure(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::UpstreamFailure, message)
    }

    /// Convenience constructor for [`ErrorCode::UpstreamTimeout`].
    pub fn upstream_timeout(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::UpstreamTimeout, message)
    }

    /// Convenience constructor for [`ErrorCode::ServiceUnavailable`].
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ServiceUnavailable, message)
    }

    /// Convenience constructor for [`ErrorCode::InternalError`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests;
