//! Shared request plumbing for upstream adapters.

use std::time::Duration;

use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;

use crate::domain::ports::UpstreamSourceError;

const USER_AGENT: &str = concat!("warehouse/", env!("CARGO_PKG_VERSION"));

/// A base URL plus the client used to call it.
#[derive(Debug, Clone)]
pub struct UpstreamEndpoint {
    client: Client,
    base: Url,
}

impl UpstreamEndpoint {
    /// Build an endpoint whose requests abort after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(base: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { client, base })
    }

    /// Base URL with `segments` appended as percent-encoded path segments.
    pub(super) fn url(&self, segments: &[&str]) -> Result<Url, UpstreamSourceError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|()| {
                let message = format!("base url {} cannot carry a path", self.base);
                UpstreamSourceError::transport(message)
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// GET `url` and decode a JSON body from a success response.
    pub(super) async fn get_json<T>(&self, url: Url) -> Result<T, UpstreamSourceError>
    where
        T: DeserializeOwned,
    {
        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|err| map_transport_error(&err))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|err| map_transport_error(&err))?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }

        serde_json::from_slice(body.as_ref()).map_err(|error| {
            UpstreamSourceError::decode(format!("unexpected JSON payload: {error}"))
        })
    }
}

fn map_transport_error(error: &reqwest::Error) -> UpstreamSourceError {
    if error.is_timeout() {
        UpstreamSourceError::timeout(error.to_string())
    } else if error.is_decode() {
        UpstreamSourceError::decode(error.to_string())
    } else {
        UpstreamSourceError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> UpstreamSourceError {
    let preview = body_preview(body);
    let message = if preview.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("no reason given")
            .to_owned()
    } else {
        preview
    };

    match status {
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
            UpstreamSourceError::timeout(format!("status {}: {message}", status.as_u16()))
        }
        _ => UpstreamSourceError::status(status.as_u16(), message),
    }
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn endpoint(base: &str) -> UpstreamEndpoint {
        let base = Url::parse(base).expect("valid base url");
        UpstreamEndpoint::new(base, Duration::from_secs(1)).expect("client builds")
    }

    #[rstest]
    #[case("https://wttr.in", &["New York"], "https://wttr.in/New%20York")]
    #[case("https://xkcd.com/", &["614", "info.0.json"], "https://xkcd.com/614/info.0.json")]
    #[case(
        "https://api.nasa.gov/base/",
        &["planetary", "apod"],
        "https://api.nasa.gov/base/planetary/apod"
    )]
    fn url_appends_encoded_segments(
        #[case] base: &str,
        #[case] segments: &[&str],
        #[case] expected: &str,
    ) {
        let url = endpoint(base).url(segments).expect("url builds");
        assert_eq!(url.as_str(), expected);
    }

    #[rstest]
    #[case(StatusCode::NOT_FOUND, 404)]
    #[case(StatusCode::BAD_REQUEST, 400)]
    #[case(StatusCode::INTERNAL_SERVER_ERROR, 500)]
    fn non_timeout_statuses_are_carried(#[case] status: StatusCode, #[case] expected: u16) {
        let error = map_status_error(status, b"{\"msg\": \"nope\"}");
        assert_eq!(
            error,
            UpstreamSourceError::status(expected, "{\"msg\": \"nope\"}")
        );
    }

    #[rstest]
    #[case(StatusCode::REQUEST_TIMEOUT)]
    #[case(StatusCode::GATEWAY_TIMEOUT)]
    fn timeout_statuses_map_to_timeout(#[case] status: StatusCode) {
        assert!(matches!(
            map_status_error(status, b""),
            UpstreamSourceError::Timeout { .. }
        ));
    }

    #[rstest]
    fn empty_bodies_fall_back_to_the_reason_phrase() {
        assert_eq!(
            map_status_error(StatusCode::NOT_FOUND, b""),
            UpstreamSourceError::status(404_u16, "Not Found")
        );
    }

    #[rstest]
    fn long_bodies_are_truncated() {
        let body = "x".repeat(500);
        let preview = body_preview(body.as_bytes());
        assert_eq!(preview.chars().count(), 163);
        assert!(preview.ends_with("..."));
    }
}
