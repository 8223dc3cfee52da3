//! Astronomy picture-of-the-day selection and entries.
//!
//! Callers send loosely typed query parameters; [`ApodRequest::try_from`]
//! turns them into exactly one [`ApodSelection`] so adapters never see a
//! conflicting combination.

use chrono::NaiveDate;

/// Date of the first published picture.
pub const APOD_FIRST_DATE: NaiveDate = match NaiveDate::from_ymd_opt(1995, 6, 16) {
    Some(date) => date,
    None => panic!("first APOD date is a valid calendar date"),
};
/// Largest number of random entries accepted per request.
pub const APOD_MAX_COUNT: u32 = 100;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Raw query parameters as received from a caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApodQuery {
    pub date: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub count: Option<String>,
    pub thumbs: Option<bool>,
}

/// Reasons a query cannot be turned into a selection.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApodQueryError {
    #[error("{param} must be a date formatted as YYYY-MM-DD")]
    MalformedDate { param: &'static str },
    #[error("{param} must not be before 1995-06-16")]
    DateTooEarly { param: &'static str },
    #[error("end_date requires start_date")]
    EndWithoutStart,
    #[error("start_date must not be after end_date")]
    InvertedRange,
    #[error("count must be an integer between 1 and {APOD_MAX_COUNT}")]
    InvalidCount,
    #[error("date, start_date/end_date and count are mutually exclusive")]
    Conflicting,
}

/// Which pictures to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApodSelection {
    /// Today's picture.
    Today,
    /// The picture published on one date.
    Date(NaiveDate),
    /// Every picture from `start` to `end` (or to today).
    Range {
        start: NaiveDate,
        end: Option<NaiveDate>,
    },
    /// `count` randomly chosen pictures.
    Random { count: u32 },
}

/// Validated picture request.
///
/// # Examples
/// ```
/// use warehouse::domain::{ApodQuery, ApodRequest, ApodSelection};
///
/// let request = ApodRequest::try_from(ApodQuery {
///     count: Some("3".into()),
///     ..ApodQuery::default()
/// })
/// .expect("valid query");
/// assert_eq!(request.selection, ApodSelection::Random { count: 3 });
///
/// assert!(ApodRequest::try_from(ApodQuery {
///     date: Some("2024-01-01".into()),
///     count: Some("3".into()),
///     ..ApodQuery::default()
/// })
/// .is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApodRequest {
    pub selection: ApodSelection,
    /// Ask for video thumbnails.
    pub thumbs: bool,
}

fn parse_date(param: &'static str, raw: &str) -> Result<NaiveDate, ApodQueryError> {
    let date = NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
        .map_err(|_| ApodQueryError::MalformedDate { param })?;
    if date < APOD_FIRST_DATE {
        return Err(ApodQueryError::DateTooEarly { param });
    }
    Ok(date)
}

fn parse_count(raw: &str) -> Result<u32, ApodQueryError> {
    let count = raw
        .trim()
        .parse::<u32>()
        .map_err(|_| ApodQueryError::InvalidCount)?;
    if (1..=APOD_MAX_COUNT).contains(&count) {
        Ok(count)
    } else {
        Err(ApodQueryError::InvalidCount)
    }
}

impl TryFrom<ApodQuery> for ApodRequest {
    type Error = ApodQueryError;

    fn try_from(query: ApodQuery) -> Result<Self, Self::Error> {
        let ApodQuery {
            date,
            start_date,
            end_date,
            count,
            thumbs,
        } = query;

        let wants_range = start_date.is_some() || end_date.is_some();
        let modes = [date.is_some(), wants_range, count.is_some()];
        if modes.into_iter().filter(|set| *set).count() > 1 {
            return Err(ApodQueryError::Conflicting);
        }

        let selection = match (date, start_date, end_date, count) {
            (Some(date), ..) => ApodSelection::Date(parse_date("date", &date)?),
            (None, Some(start), end, None) => {
                let start = parse_date("start_date", &start)?;
                let end = end
                    .map(|raw| parse_date("end_date", &raw))
                    .transpose()?;
                if end.is_some_and(|end| start > end) {
                    return Err(ApodQueryError::InvertedRange);
                }
                ApodSelection::Range { start, end }
            }
            (None, None, Some(_), None) => return Err(ApodQueryError::EndWithoutStart),
            (None, None, None, Some(count)) => ApodSelection::Random {
                count: parse_count(&count)?,
            },
            (None, None, None, None) => ApodSelection::Today,
            (None, _, _, Some(_)) => return Err(ApodQueryError::Conflicting),
        };

        Ok(Self {
            selection,
            thumbs: thumbs.unwrap_or(false),
        })
    }
}

/// One published picture (or video) with its metadata.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ApodEntry {
    pub date: Option<String>,
    pub explanation: Option<String>,
    pub media_type: Option<String>,
    pub service_version: Option<String>,
    pub title: Option<String>,
    pub url: Option<String>,
    pub hdurl: Option<String>,
    pub thumbnail_url: Option<String>,
    pub copyright: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn query(
        date: Option<&str>,
        start: Option<&str>,
        end: Option<&str>,
        count: Option<&str>,
    ) -> ApodQuery {
        ApodQuery {
            date: date.map(str::to_owned),
            start_date: start.map(str::to_owned),
            end_date: end.map(str::to_owned),
            count: count.map(str::to_owned),
            thumbs: None,
        }
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
    }

    #[rstest]
    fn empty_query_selects_today() {
        let request = ApodRequest::try_from(ApodQuery::default()).expect("valid query");
        assert_eq!(request.selection, ApodSelection::Today);
        assert!(!request.thumbs);
    }

    #[rstest]
    #[case(query(Some("2024-06-21"), None, None, None), ApodSelection::Date(ymd(2024, 6, 21)))]
    #[case(
        query(None, Some("2024-06-01"), None, None),
        ApodSelection::Range { start: ymd(2024, 6, 1), end: None }
    )]
    #[case(
        query(None, Some("2024-06-01"), Some("2024-06-01"), None),
        ApodSelection::Range { start: ymd(2024, 6, 1), end: Some(ymd(2024, 6, 1)) }
    )]
    #[case(query(None, None, None, Some("100")), ApodSelection::Random { count: 100 })]
    #[case(query(Some("1995-06-16"), None, None, None), ApodSelection::Date(APOD_FIRST_DATE))]
    fn accepts_single_mode(#[case] input: ApodQuery, #[case] expected: ApodSelection) {
        let request = ApodRequest::try_from(input).expect("valid query");
        assert_eq!(request.selection, expected);
    }

    #[rstest]
    #[case(query(Some("2024-06-21"), Some("2024-06-01"), None, None), ApodQueryError::Conflicting)]
    #[case(query(Some("2024-06-21"), None, None, Some("2")), ApodQueryError::Conflicting)]
    #[case(query(None, None, Some("2024-06-01"), Some("2")), ApodQueryError::Conflicting)]
    #[case(query(None, None, Some("2024-06-01"), None), ApodQueryError::EndWithoutStart)]
    #[case(
        query(None, Some("2024-06-02"), Some("2024-06-01"), None),
        ApodQueryError::InvertedRange
    )]
    #[case(query(None, None, None, Some("0")), ApodQueryError::InvalidCount)]
    #[case(query(None, None, None, Some("101")), ApodQueryError::InvalidCount)]
    #[case(query(None, None, None, Some("many")), ApodQueryError::InvalidCount)]
    #[case(
        query(Some("21/06/2024"), None, None, None),
        ApodQueryError::MalformedDate { param: "date" }
    )]
    #[case(
        query(Some("1995-06-15"), None, None, None),
        ApodQueryError::DateTooEarly { param: "date" }
    )]
    #[case(
        query(None, Some("2024-06-01"), Some("2024-13-01"), None),
        ApodQueryError::MalformedDate { param: "end_date" }
    )]
    fn rejects_invalid_queries(#[case] input: ApodQuery, #[case] expected: ApodQueryError) {
        assert_eq!(ApodRequest::try_from(input), Err(expected));
    }

    #[rstest]
    fn thumbs_flag_is_carried() {
        let request = ApodRequest::try_from(ApodQuery {
            thumbs: Some(true),
            ..ApodQuery::default()
        })
        .expect("valid query");
        assert!(request.thumbs);
    }
}
