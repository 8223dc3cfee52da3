//! Current weather by region, proxied from wttr.in.
//!
//! ```text
//! GET /weather/Lisbon
//! ```

use actix_web::{get, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Error, WeatherRegion, WeatherReport};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// Upstream name used in error messages.
const UPSTREAM: &str = "wttr.in";

/// Current conditions for a region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct WeatherResponse {
    #[schema(example = "Lisbon")]
    pub region: String,
    #[schema(example = 15.0)]
    pub temperature_c: f64,
    #[schema(example = 14.0)]
    pub feels_like_c: f64,
    /// Relative humidity in percent.
    #[schema(example = 82.0)]
    pub humidity: f64,
    #[schema(example = "Partly cloudy")]
    pub description: String,
    #[schema(example = 0.0)]
    pub precip_mm: f64,
    #[schema(example = 10.0)]
    pub visibility_km: f64,
    #[schema(example = 3.0)]
    pub uv_index: f64,
}

impl WeatherResponse {
    fn new(region: &WeatherRegion, report: WeatherReport) -> Self {
        Self {
            region: region.to_string(),
            temperature_c: report.temperature_c,
            feels_like_c: report.feels_like_c,
            humidity: report.humidity,
            description: report.description,
            precip_mm: report.precip_mm,
            visibility_km: report.visibility_km,
            uv_index: report.uv_index,
        }
    }
}

/// Look up the current weather for a region.
#[utoipa::path(
    get,
    path = "/weather/{region}",
    params(("region" = String, Path, description = "City, airport code or landmark")),
    responses(
        (status = 200, description = "Current conditions", body = WeatherResponse),
        (status = 400, description = "Invalid region", body = ErrorSchema),
        (status = 502, description = "Upstream failure", body = ErrorSchema),
        (status = 504, description = "Upstream timeout", body = ErrorSchema)
    ),
    tags = ["weather"],
    operation_id = "currentWeather"
)]
#[get("/weather/{region}")]
pub async fn current_weather(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<WeatherResponse>> {
    let region = WeatherRegion::new(path.into_inner())
        .map_err(|err| Error::invalid_request(err.to_string()))?;
    let report = state
        .weather
        .current_conditions(&region)
        .await
        .map_err(|err| err.to_domain_error(UPSTREAM))?;
    Ok(web::Json(WeatherResponse::new(&region, report)))
}
