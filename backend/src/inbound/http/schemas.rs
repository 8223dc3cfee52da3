//! OpenAPI schema definitions for domain types.
//!
//! Domain types stay framework-agnostic by not deriving `ToSchema`; these
//! wrappers mirror their serialised shape for the generated document.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// Query parameters or path segments are malformed.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// A request body violates the student record schema.
    #[schema(rename = "validation_failed")]
    ValidationFailed,
    /// The requested resource does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// A third-party API failed or returned an unusable response.
    #[schema(rename = "upstream_failure")]
    UpstreamFailure,
    /// A third-party API did not answer in time.
    #[schema(rename = "upstream_timeout")]
    UpstreamTimeout,
    /// The document store is unreachable.
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error)]
#[serde(rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "not_found")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "Student 65f0c0ffee0000000000beef not found")]
    message: String,
    /// Correlation identifier of the failed request.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Supplementary details, e.g. `fields` for schema violations.
    details: Option<serde_json::Value>,
}
