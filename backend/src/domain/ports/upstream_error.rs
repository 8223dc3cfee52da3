//! Error contract shared by the upstream pass-through sources.

use tracing::warn;

use crate::domain::Error;

use super::define_port_error;

define_port_error! {
    /// Errors surfaced while calling a third-party API.
    pub enum UpstreamSourceError {
        /// Request never produced a response.
        Transport { message: String } =>
            "upstream transport failed: {message}",
        /// Request exceeded the configured timeout.
        Timeout { message: String } =>
            "upstream timed out: {message}",
        /// Upstream answered with a non-success status.
        Status { status: u16, message: String } =>
            "upstream returned status {status}: {message}",
        /// Response body did not match the expected shape.
        Decode { message: String } =>
            "upstream response decode failed: {message}",
    }
}

impl UpstreamSourceError {
    /// Translate into the API error reported for `upstream`.
    ///
    /// Status 404 becomes not found, other client errors become an invalid
    /// request, and everything else is an upstream failure or timeout.
    ///
    /// # Examples
    /// ```
    /// use warehouse::domain::ErrorCode;
    /// use warehouse::domain::ports::UpstreamSourceError;
    ///
    /// let err = UpstreamSourceError::status(404_u16, "no such comic").to_domain_error("xkcd");
    /// assert_eq!(err.code(), ErrorCode::NotFound);
    /// ```
    #[must_use]
    pub fn to_domain_error(&self, upstream: &str) -> Error {
        warn!(upstream, kind = self.kind(), error = %self, "upstream call failed");
        match self {
            Self::Timeout { .. } => {
                Error::upstream_timeout(format!("{upstream} did not respond in time"))
            }
            Self::Status { status: 404, .. } => {
                Error::not_found(format!("{upstream} has no matching resource"))
            }
            Self::Status { status, message } if (400..500).contains(status) => {
                Error::invalid_request(format!("{upstream} rejected the request: {message}"))
            }
            Self::Status { status, .. } => {
                Error::upstream_failure(format!("{upstream} responded with status {status}"))
            }
            Self::Transport { .. } => {
                Error::upstream_failure(format!("{upstream} is unreachable"))
            }
            Self::Decode { .. } => {
                Error::upstream_failure(format!("{upstream} returned an unexpected payload"))
            }
        }
    }
}
