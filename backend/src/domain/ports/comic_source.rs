//! Driven port for web comic metadata.

use async_trait::async_trait;

use crate::domain::{Comic, ComicSelector};

use super::UpstreamSourceError;

/// Port for fetching a comic by selector.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ComicSource: Send + Sync {
    async fn fetch(&self, selector: ComicSelector) -> Result<Comic, UpstreamSourceError>;
}

/// Newest number served by [`FixtureComicSource`].
pub const FIXTURE_LATEST_COMIC: u32 = 2950;

/// Fixture source that knows comics `1..=FIXTURE_LATEST_COMIC`.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureComicSource;

#[async_trait]
impl ComicSource for FixtureComicSource {
    async fn fetch(&self, selector: ComicSelector) -> Result<Comic, UpstreamSourceError> {
        let num = match selector {
            ComicSelector::Latest => FIXTURE_LATEST_COMIC,
            ComicSelector::Number(num) => num.get(),
        };
        if num > FIXTURE_LATEST_COMIC {
            return Err(UpstreamSourceError::status(404_u16, format!("comic {num} not published")));
        }
        Ok(Comic {
            month: "6".to_owned(),
            num,
            link: String::new(),
            year: "2024".to_owned(),
            news: String::new(),
            safe_title: format!("Fixture Comic {num}"),
            transcript: String::new(),
            alt: "Alt text for a fixture comic.".to_owned(),
            img: format!("https://imgs.example.test/comics/fixture_{num}.png"),
            title: format!("Fixture Comic {num}"),
            day: "21".to_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn unpublished_numbers_are_not_found() {
        let selector = ComicSelector::parse_number("9999").expect("positive number");
        let err = FixtureComicSource
            .fetch(selector)
            .await
            .expect_err("beyond latest");
        assert!(matches!(err, UpstreamSourceError::Status { status: 404, .. }));
    }

    #[rstest]
    #[tokio::test]
    async fn latest_has_the_newest_number() {
        let comic = FixtureComicSource
            .fetch(ComicSelector::Latest)
            .await
            .expect("fixture fetch");
        assert_eq!(comic.num, FIXTURE_LATEST_COMIC);
    }
}
