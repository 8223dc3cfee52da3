//! Web comic lookup.

use std::num::NonZeroU32;

/// Which comic to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComicSelector {
    /// The most recently published comic.
    Latest,
    /// A comic by its sequence number, starting at 1.
    Number(NonZeroU32),
}

/// Reasons a comic number is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("comic number must be a positive integer")]
pub struct ComicNumberError;

impl ComicSelector {
    /// Parse a path segment into a numbered selector.
    ///
    /// # Examples
    /// ```
    /// use warehouse::domain::ComicSelector;
    ///
    /// assert!(ComicSelector::parse_number("614").is_ok());
    /// assert!(ComicSelector::parse_number("0").is_err());
    /// assert!(ComicSelector::parse_number("-3").is_err());
    /// ```
    pub fn parse_number(raw: &str) -> Result<Self, ComicNumberError> {
        raw.parse::<NonZeroU32>()
            .map(Self::Number)
            .map_err(|_| ComicNumberError)
    }
}

/// Comic metadata as published upstream.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Comic {
    pub month: String,
    pub num: u32,
    pub link: String,
    pub year: String,
    pub news: String,
    pub safe_title: String,
    pub transcript: String,
    pub alt: String,
    pub img: String,
    pub title: String,
    pub day: String,
}
