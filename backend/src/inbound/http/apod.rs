//! Astronomy Picture of the Day, proxied from NASA.
//!
//! ```text
//! GET /apod
//! GET /apod?date=2024-06-01
//! GET /apod?start_date=2024-06-01&end_date=2024-06-07&thumbs=true
//! GET /apod?count=3
//! ```

use actix_web::{get, web};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{ApodEntry, ApodQuery, ApodRequest, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

const UPSTREAM: &str = "apod";

/// Query parameters accepted by `GET /apod`.
///
/// `date`, the `start_date`/`end_date` range and `count` are mutually
/// exclusive; with none of them today's picture is returned.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ApodQueryParams {
    /// Single date, `YYYY-MM-DD`.
    pub date: Option<String>,
    /// First date of a range, `YYYY-MM-DD`.
    pub start_date: Option<String>,
    /// Last date of a range; defaults to today.
    pub end_date: Option<String>,
    /// Number of random pictures, 1 to 100.
    pub count: Option<String>,
    /// Include `thumbnail_url` for video entries.
    pub thumbs: Option<bool>,
}

impl From<ApodQueryParams> for ApodQuery {
    fn from(params: ApodQueryParams) -> Self {
        Self {
            date: params.date,
            start_date: params.start_date,
            end_date: params.end_date,
            count: params.count,
            thumbs: params.thumbs,
        }
    }
}

/// One picture of the day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ApodEntryResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "2024-06-01")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "image")]
    pub media_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "v1")]
    pub service_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hdurl: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,
}

impl From<ApodEntry> for ApodEntryResponse {
    fn from(entry: ApodEntry) -> Self {
        let ApodEntry {
            date,
            explanation,
            media_type,
            service_version,
            title,
            url,
            hdurl,
            thumbnail_url,
            copyright,
        } = entry;
        Self {
            date,
            explanation,
            media_type,
            service_version,
            title,
            url,
            hdurl,
            thumbnail_url,
            copyright,
        }
    }
}

/// Fetch pictures of the day by date, range or random sample.
#[utoipa::path(
    get,
    path = "/apod",
    params(ApodQueryParams),
    responses(
        (status = 200, description = "Pictures", body = [ApodEntryResponse]),
        (status = 400, description = "Invalid or conflicting parameters", body = ErrorSchema),
        (status = 502, description = "Upstream failure", body = ErrorSchema),
        (status = 504, description = "Upstream timeout", body = ErrorSchema)
    ),
    tags = ["apod"],
    operation_id = "pictureOfTheDay"
)]
#[get("/apod")]
pub async fn picture_of_the_day(
    state: web::Data<HttpState>,
    query: web::Query<ApodQueryParams>,
) -> ApiResult<web::Json<Vec<ApodEntryResponse>>> {
    let request = ApodRequest::try_from(ApodQuery::from(query.into_inner()))
        .map_err(|err| Error::invalid_request(err.to_string()))?;
    let entries = state
        .apod
        .fetch(&request)
        .await
        .map_err(|err| err.to_domain_error(UPSTREAM))?;
    Ok(web::Json(
        entries.into_iter().map(ApodEntryResponse::from).collect(),
    ))
}
