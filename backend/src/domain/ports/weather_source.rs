//! Driven port for current weather conditions.

use async_trait::async_trait;

use crate::domain::{WeatherRegion, WeatherReport};

use super::UpstreamSourceError;

/// Port for looking up the weather in a region.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WeatherSource: Send + Sync {
    async fn current_conditions(
        &self,
        region: &WeatherRegion,
    ) -> Result<WeatherReport, UpstreamSourceError>;
}

/// Fixture source reporting the same mild drizzle everywhere.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureWeatherSource;

#[async_trait]
impl WeatherSource for FixtureWeatherSource {
    async fn current_conditions(
        &self,
        _region: &WeatherRegion,
    ) -> Result<WeatherReport, UpstreamSourceError> {
        Ok(WeatherReport {
            temperature_c: 15.0,
            feels_like_c: 18.0,
            humidity: 97.0,
            description: "Light drizzle".to_owned(),
            precip_mm: 0.4,
            visibility_km: 2.0,
            uv_index: 0.0,
        })
    }
}
