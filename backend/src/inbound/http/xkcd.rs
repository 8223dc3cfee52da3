//! XKCD comics by number, or the latest one.

use actix_web::{get, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Comic, ComicSelector, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

const UPSTREAM: &str = "xkcd";

/// Comic metadata in the upstream field layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ComicResponse {
    #[schema(example = "9")]
    pub month: String,
    #[schema(example = 614)]
    pub num: u32,
    pub link: String,
    #[schema(example = "2009")]
    pub year: String,
    pub news: String,
    #[schema(example = "Woodpecker")]
    pub safe_title: String,
    pub transcript: String,
    pub alt: String,
    #[schema(example = "https://imgs.xkcd.com/comics/woodpecker.png")]
    pub img: String,
    #[schema(example = "Woodpecker")]
    pub title: String,
    #[schema(example = "24")]
    pub day: String,
}

impl From<Comic> for ComicResponse {
    fn from(comic: Comic) -> Self {
        let Comic {
            month,
            num,
            link,
            year,
            news,
            safe_title,
            transcript,
            alt,
            img,
            title,
            day,
        } = comic;
        Self {
            month,
            num,
            link,
            year,
            news,
            safe_title,
            transcript,
            alt,
            img,
            title,
            day,
        }
    }
}

async fn fetch(state: &HttpState, selector: ComicSelector) -> ApiResult<web::Json<ComicResponse>> {
    let comic = state
        .comics
        .fetch(selector)
        .await
        .map_err(|err| err.to_domain_error(UPSTREAM))?;
    Ok(web::Json(comic.into()))
}

/// Fetch the most recently published comic.
#[utoipa::path(
    get,
    path = "/xkcd",
    responses(
        (status = 200, description = "Latest comic", body = ComicResponse),
        (status = 502, description = "Upstream failure", body = ErrorSchema),
        (status = 504, description = "Upstream timeout", body = ErrorSchema)
    ),
    tags = ["xkcd"],
    operation_id = "latestComic"
)]
#[get("/xkcd")]
pub async fn latest_comic(state: web::Data<HttpState>) -> ApiResult<web::Json<ComicResponse>> {
    fetch(&state, ComicSelector::Latest).await
}

/// Fetch a comic by its number.
#[utoipa::path(
    get,
    path = "/xkcd/{num}",
    params(("num" = u32, Path, description = "Comic number, starting at 1")),
    responses(
        (status = 200, description = "Comic", body = ComicResponse),
        (status = 400, description = "Number is not a positive integer", body = ErrorSchema),
        (status = 404, description = "No such comic", body = ErrorSchema),
        (status = 502, description = "Upstream failure", body = ErrorSchema)
    ),
    tags = ["xkcd"],
    operation_id = "comicByNumber"
)]
#[get("/xkcd/{num}")]
pub async fn comic_by_number(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<ComicResponse>> {
    let selector = ComicSelector::parse_number(&path.into_inner())
        .map_err(|err| Error::invalid_request(err.to_string()))?;
    fetch(&state, selector).await
}
