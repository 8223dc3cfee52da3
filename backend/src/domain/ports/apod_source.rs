//! Driven port for astronomy pictures of the day.

use async_trait::async_trait;
use chrono::{Days, NaiveDate};

use crate::domain::{ApodEntry, ApodRequest, ApodSelection};

use super::UpstreamSourceError;

/// Port for fetching one or more picture entries.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ApodSource: Send + Sync {
    /// Fetch the entries for `request`; single results are still a list.
    async fn fetch(&self, request: &ApodRequest) -> Result<Vec<ApodEntry>, UpstreamSourceError>;
}

/// Fixture source synthesising entries that match the selection shape.
///
/// `Today` resolves to a fixed date so responses stay deterministic.
#[derive(Debug, Clone, Copy)]
pub struct FixtureApodSource {
    today: NaiveDate,
}

impl FixtureApodSource {
    #[must_use]
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }

    fn entry(date: NaiveDate, thumbs: bool) -> ApodEntry {
        let day = date.format("%y%m%d");
        ApodEntry {
            date: Some(date.to_string()),
            explanation: Some("A fixture picture of a faraway galaxy.".to_owned()),
            media_type: Some("image".to_owned()),
            service_version: Some("v1".to_owned()),
            title: Some(format!("Fixture galaxy {date}")),
            url: Some(format!("https://apod.example.test/image/{day}.jpg")),
            hdurl: Some(format!("https://apod.example.test/image/{day}_hd.jpg")),
            thumbnail_url: thumbs.then(|| format!("https://apod.example.test/thumb/{day}.jpg")),
            copyright: None,
        }
    }
}

impl Default for FixtureApodSource {
    fn default() -> Self {
        Self::new(NaiveDate::from_ymd_opt(2024, 6, 21).unwrap_or(crate::domain::APOD_FIRST_DATE))
    }
}

#[async_trait]
impl ApodSource for FixtureApodSource {
    async fn fetch(&self, request: &ApodRequest) -> Result<Vec<ApodEntry>, UpstreamSourceError> {
        let thumbs = request.thumbs;
        let entries = match request.selection {
            ApodSelection::Today => vec![Self::entry(self.today, thumbs)],
            ApodSelection::Date(date) => vec![Self::entry(date, thumbs)],
            ApodSelection::Range { start, end } => {
                let end = end.unwrap_or(self.today);
                start
                    .iter_days()
                    .take_while(|date| *date <= end)
                    .map(|date| Self::entry(date, thumbs))
                    .collect()
            }
            ApodSelection::Random { count } => (0..count)
                .filter_map(|offset| self.today.checked_sub_days(Days::new(u64::from(offset))))
                .map(|date| Self::entry(date, thumbs))
                .collect(),
        };
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
    }

    #[rstest]
    #[tokio::test]
    async fn range_is_inclusive() {
        let source = FixtureApodSource::new(ymd(2024, 6, 21));
        let entries = source
            .fetch(&ApodRequest {
                selection: ApodSelection::Range {
                    start: ymd(2024, 6, 1),
                    end: Some(ymd(2024, 6, 3)),
                },
                thumbs: false,
            })
            .await
            .expect("fixture fetch");
        let dates: Vec<_> = entries.iter().filter_map(|e| e.date.as_deref()).collect();
        assert_eq!(dates, ["2024-06-01", "2024-06-02", "2024-06-03"]);
    }

    #[rstest]
    #[tokio::test]
    async fn random_returns_requested_count_with_thumbnails() {
        let source = FixtureApodSource::default();
        let entries = source
            .fetch(&ApodRequest {
                selection: ApodSelection::Random { count: 4 },
                thumbs: true,
            })
            .await
            .expect("fixture fetch");
        assert_eq!(entries.len(), 4);
        assert!(entries.iter().all(|entry| entry.thumbnail_url.is_some()));
    }
}
