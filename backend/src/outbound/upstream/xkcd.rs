//! XKCD comic source.

use async_trait::async_trait;

use super::dto::XkcdComicDto;
use super::http::UpstreamEndpoint;
use crate::domain::ports::{ComicSource, UpstreamSourceError};
use crate::domain::{Comic, ComicSelector};

const INFO_DOCUMENT: &str = "info.0.json";

/// Comic source reading XKCD's `info.0.json` documents.
#[derive(Debug, Clone)]
pub struct XkcdComicSource {
    endpoint: UpstreamEndpoint,
}

impl XkcdComicSource {
    #[must_use]
    pub fn new(endpoint: UpstreamEndpoint) -> Self {
        Self { endpoint }
    }
}

#[async_trait]
impl ComicSource for XkcdComicSource {
    async fn fetch(&self, selector: ComicSelector) -> Result<Comic, UpstreamSourceError> {
        let url = match selector {
            ComicSelector::Latest => self.endpoint.url(&[INFO_DOCUMENT])?,
            ComicSelector::Number(num) => {
                self.endpoint.url(&[num.to_string().as_str(), INFO_DOCUMENT])?
            }
        };
        let comic: XkcdComicDto = self.endpoint.get_json(url).await?;
        Ok(comic.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn decodes_published_metadata() {
        let dto: XkcdComicDto = serde_json::from_str(
            r#"{
                "month": "7", "num": 614, "link": "", "year": "2009", "news": "",
                "safe_title": "Woodpecker",
                "transcript": "[[A man with a beret and a woman are standing on a boardwalk]]",
                "alt": "If you don't have an extension cord I can get that too.",
                "img": "https://imgs.xkcd.com/comics/woodpecker.png",
                "title": "Woodpecker", "day": "24"
            }"#,
        )
        .expect("payload decodes");

        let comic = Comic::from(dto);
        assert_eq!(comic.num, 614);
        assert_eq!(comic.safe_title, "Woodpecker");
        assert_eq!(comic.day, "24");
    }

    #[rstest]
    fn missing_text_fields_default_to_empty() {
        let dto: XkcdComicDto = serde_json::from_str(r#"{ "num": 1 }"#).expect("payload decodes");
        let comic = Comic::from(dto);
        assert_eq!(comic.num, 1);
        assert!(comic.transcript.is_empty());
    }
}
