//! Current weather conditions for a named region.

/// Longest region name forwarded upstream.
pub const WEATHER_REGION_MAX_LEN: usize = 100;

/// Reasons a region name is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum WeatherRegionError {
    #[error("region must not be empty")]
    Empty,
    #[error("region must be at most {WEATHER_REGION_MAX_LEN} characters")]
    TooLong,
}

/// Region name accepted by the weather lookup (city, airport code, ...).
///
/// # Examples
/// ```
/// use warehouse::domain::WeatherRegion;
///
/// let region = WeatherRegion::new("  Lisbon ").expect("valid region");
/// assert_eq!(region.as_ref(), "Lisbon");
/// assert!(WeatherRegion::new("   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherRegion(String);

impl WeatherRegion {
    pub fn new(value: impl AsRef<str>) -> Result<Self, WeatherRegionError> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            return Err(WeatherRegionError::Empty);
        }
        if trimmed.chars().count() > WEATHER_REGION_MAX_LEN {
            return Err(WeatherRegionError::TooLong);
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for WeatherRegion {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl std::fmt::Display for WeatherRegion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Observed conditions at the time of the lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    pub temperature_c: f64,
    pub feels_like_c: f64,
    pub humidity: f64,
    pub description: String,
    pub precip_mm: f64,
    pub visibility_km: f64,
    pub uv_index: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", WeatherRegionError::Empty)]
    #[case(" \t", WeatherRegionError::Empty)]
    fn rejects_blank_regions(#[case] input: &str, #[case] expected: WeatherRegionError) {
        assert_eq!(WeatherRegion::new(input), Err(expected));
    }

    #[rstest]
    fn rejects_overlong_regions() {
        let long = "a".repeat(WEATHER_REGION_MAX_LEN + 1);
        assert_eq!(WeatherRegion::new(long), Err(WeatherRegionError::TooLong));
    }

    #[rstest]
    fn accepts_region_at_limit_with_padding() {
        let name = format!(" {} ", "b".repeat(WEATHER_REGION_MAX_LEN));
        let region = WeatherRegion::new(name).expect("limit is inclusive");
        assert_eq!(region.as_ref().len(), WEATHER_REGION_MAX_LEN);
    }
}
