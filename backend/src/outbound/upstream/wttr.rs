//! wttr.in weather source.

use async_trait::async_trait;

use super::dto::WttrResponseDto;
use super::http::UpstreamEndpoint;
use crate::domain::ports::{UpstreamSourceError, WeatherSource};
use crate::domain::{WeatherRegion, WeatherReport};

/// Weather source reading wttr.in's `j1` JSON format.
#[derive(Debug, Clone)]
pub struct WttrWeatherSource {
    endpoint: UpstreamEndpoint,
}

impl WttrWeatherSource {
    #[must_use]
    pub fn new(endpoint: UpstreamEndpoint) -> Self {
        Self { endpoint }
    }
}

fn first_condition(body: WttrResponseDto) -> Result<WeatherReport, UpstreamSourceError> {
    body.current_condition
        .into_iter()
        .next()
        .ok_or_else(|| UpstreamSourceError::decode("current_condition is empty"))?
        .into_report()
        .map_err(UpstreamSourceError::decode)
}

#[async_trait]
impl WeatherSource for WttrWeatherSource {
    async fn current_conditions(
        &self,
        region: &WeatherRegion,
    ) -> Result<WeatherReport, UpstreamSourceError> {
        let mut url = self.endpoint.url(&[region.as_ref()])?;
        url.query_pairs_mut().append_pair("format", "j1");
        let body: WttrResponseDto = self.endpoint.get_json(url).await?;
        first_condition(body)
    }
}
