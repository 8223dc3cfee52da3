//! NASA astronomy picture-of-the-day source.

use async_trait::async_trait;
use reqwest::Url;

use super::dto::ApodPayloadDto;
use super::http::UpstreamEndpoint;
use crate::domain::ports::{ApodSource, UpstreamSourceError};
use crate::domain::{ApodEntry, ApodRequest, ApodSelection};

/// APOD source calling `planetary/apod` with an API key.
#[derive(Debug, Clone)]
pub struct NasaApodSource {
    endpoint: UpstreamEndpoint,
    api_key: String,
}

impl NasaApodSource {
    pub fn new(endpoint: UpstreamEndpoint, api_key: impl Into<String>) -> Self {
        Self {
            endpoint,
            api_key: api_key.into(),
        }
    }

    fn request_url(&self, request: &ApodRequest) -> Result<Url, UpstreamSourceError> {
        let mut url = self.endpoint.url(&["planetary", "apod"])?;
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("api_key", &self.api_key);
            match request.selection {
                ApodSelection::Today => {}
                ApodSelection::Date(date) => {
                    query.append_pair("date", &date.to_string());
                }
                ApodSelection::Range { start, end } => {
                    query.append_pair("start_date", &start.to_string());
                    if let Some(end) = end {
                        query.append_pair("end_date", &end.to_string());
                    }
                }
                ApodSelection::Random { count } => {
                    query.append_pair("count", &count.to_string());
                }
            }
            if request.thumbs {
                query.append_pair("thumbs", "true");
            }
        }
        Ok(url)
    }
}

#[async_trait]
impl ApodSource for NasaApodSource {
    async fn fetch(&self, request: &ApodRequest) -> Result<Vec<ApodEntry>, UpstreamSourceError> {
        let url = self.request_url(request)?;
        let payload: ApodPayloadDto = self.endpoint.get_json(url).await?;
        Ok(payload.into_entries())
    }
}
