//! DTOs for decoding upstream JSON payloads.
//!
//! Adapters decode into these transport shapes first, then map into domain
//! values in one pass.

use serde::Deserialize;

use crate::domain::{ApodEntry, Comic, WeatherReport};

#[derive(Debug, Deserialize)]
pub(super) struct WttrResponseDto {
    #[serde(default)]
    pub(super) current_condition: Vec<WttrConditionDto>,
}

/// wttr.in encodes every number as a string.
#[derive(Debug, Deserialize)]
pub(super) struct WttrConditionDto {
    #[serde(rename = "temp_C")]
    temp_c: String,
    #[serde(rename = "FeelsLikeC")]
    feels_like_c: String,
    humidity: String,
    #[serde(rename = "precipMM")]
    precip_mm: String,
    visibility: String,
    #[serde(rename = "uvIndex")]
    uv_index: String,
    #[serde(rename = "weatherDesc", default)]
    weather_desc: Vec<WttrValueDto>,
}

#[derive(Debug, Deserialize)]
struct WttrValueDto {
    value: String,
}

fn number(field: &str, raw: &str) -> Result<f64, String> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| format!("{field} is not numeric: {raw:?}"))
}

impl WttrConditionDto {
    pub(super) fn into_report(self) -> Result<WeatherReport, String> {
        Ok(WeatherReport {
            temperature_c: number("temp_C", &self.temp_c)?,
            feels_like_c: number("FeelsLikeC", &self.feels_like_c)?,
            humidity: number("humidity", &self.humidity)?,
            description: self
                .weather_desc
                .into_iter()
                .next()
                .map(|desc| desc.value)
                .unwrap_or_default(),
            precip_mm: number("precipMM", &self.precip_mm)?,
            visibility_km: number("visibility", &self.visibility)?,
            uv_index: number("uvIndex", &self.uv_index)?,
        })
    }
}

/// NASA answers with one object for single dates and an array otherwise.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(super) enum ApodPayloadDto {
    Many(Vec<ApodEntryDto>),
    One(ApodEntryDto),
}

impl ApodPayloadDto {
    pub(super) fn into_entries(self) -> Vec<ApodEntry> {
        match self {
            Self::Many(entries) => entries.into_iter().map(ApodEntry::from).collect(),
            Self::One(entry) => vec![entry.into()],
        }
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct ApodEntryDto {
    date: Option<String>,
    explanation: Option<String>,
    media_type: Option<String>,
    service_version: Option<String>,
    title: Option<String>,
    url: Option<String>,
    hdurl: Option<String>,
    thumbnail_url: Option<String>,
    copyright: Option<String>,
}

impl From<ApodEntryDto> for ApodEntry {
    fn from(dto: ApodEntryDto) -> Self {
        Self {
            date: dto.date,
            explanation: dto.explanation,
            media_type: dto.media_type,
            service_version: dto.service_version,
            title: dto.title,
            url: dto.url,
            hdurl: dto.hdurl,
            // NASA pads copyright lines with newlines.
            copyright: dto.copyright.map(|text| text.trim().to_owned()),
            thumbnail_url: dto.thumbnail_url,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct XkcdComicDto {
    num: u32,
    #[serde(default)]
    month: String,
    #[serde(default)]
    link: String,
    #[serde(default)]
    year: String,
    #[serde(default)]
    news: String,
    #[serde(default)]
    safe_title: String,
    #[serde(default)]
    transcript: String,
    #[serde(default)]
    alt: String,
    #[serde(default)]
    img: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    day: String,
}

impl From<XkcdComicDto> for Comic {
    fn from(dto: XkcdComicDto) -> Self {
        Self {
            month: dto.month,
            num: dto.num,
            link: dto.link,
            year: dto.year,
            news: dto.news,
            safe_title: dto.safe_title,
            transcript: dto.transcript,
            alt: dto.alt,
            img: dto.img,
            title: dto.title,
            day: dto.day,
        }
    }
}
