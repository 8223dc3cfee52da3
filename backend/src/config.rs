//! Runtime settings loaded via OrthoConfig.
//!
//! Values come from `WAREHOUSE_*` environment variables, CLI flags and an
//! optional config file. Every field is optional; accessors apply defaults.

use std::net::SocketAddr;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use url::Url;

const DEFAULT_BIND_ADDR: SocketAddr = SocketAddr::V4(std::net::SocketAddrV4::new(
    std::net::Ipv4Addr::UNSPECIFIED,
    8080,
));
const DEFAULT_DATABASE: &str = "college";
const DEFAULT_COLLECTION: &str = "students";
const DEFAULT_STORE_TIMEOUT_SECS: u64 = 5;
const DEFAULT_NASA_API_KEY: &str = "DEMO_KEY";
const DEFAULT_WEATHER_BASE_URL: &str = "https://wttr.in";
const DEFAULT_APOD_BASE_URL: &str = "https://api.nasa.gov";
const DEFAULT_XKCD_BASE_URL: &str = "https://xkcd.com";
const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 10;

/// A configured base URL could not be parsed.
#[derive(Debug, thiserror::Error)]
#[error("{key} is not a valid URL: {source}")]
pub struct InvalidBaseUrl {
    key: &'static str,
    #[source]
    source: url::ParseError,
}

/// Settings for the HTTP server, the document store and upstream APIs.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "WAREHOUSE")]
pub struct WarehouseSettings {
    /// Socket address to listen on.
    pub bind_addr: Option<SocketAddr>,
    /// MongoDB connection string; unset selects the in-memory store.
    pub mongodb_url: Option<String>,
    pub database: Option<String>,
    pub collection: Option<String>,
    /// Store server-selection timeout in seconds.
    pub store_timeout_secs: Option<u64>,
    pub nasa_api_key: Option<String>,
    pub weather_base_url: Option<String>,
    pub apod_base_url: Option<String>,
    pub xkcd_base_url: Option<String>,
    /// Per-request timeout for upstream APIs in seconds.
    pub upstream_timeout_secs: Option<u64>,
    /// Serve canned upstream data instead of calling third parties.
    #[ortho_config(default = false)]
    pub fixture_upstreams: bool,
}

fn parse_base(
    key: &'static str,
    configured: Option<&str>,
    default: &str,
) -> Result<Url, InvalidBaseUrl> {
    Url::parse(configured.unwrap_or(default)).map_err(|source| InvalidBaseUrl { key, source })
}

impl WarehouseSettings {
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr.unwrap_or(DEFAULT_BIND_ADDR)
    }

    /// Connection string, ignoring blank values.
    pub fn mongodb_url(&self) -> Option<&str> {
        self.mongodb_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    pub fn database(&self) -> &str {
        self.database.as_deref().unwrap_or(DEFAULT_DATABASE)
    }

    pub fn collection(&self) -> &str {
        self.collection.as_deref().unwrap_or(DEFAULT_COLLECTION)
    }

    pub fn store_timeout(&self) -> Duration {
        Duration::from_secs(self.store_timeout_secs.unwrap_or(DEFAULT_STORE_TIMEOUT_SECS))
    }

    pub fn nasa_api_key(&self) -> &str {
        self.nasa_api_key.as_deref().unwrap_or(DEFAULT_NASA_API_KEY)
    }

    pub fn weather_base_url(&self) -> Result<Url, InvalidBaseUrl> {
        parse_base(
            "weather_base_url",
            self.weather_base_url.as_deref(),
            DEFAULT_WEATHER_BASE_URL,
        )
    }

    pub fn apod_base_url(&self) -> Result<Url, InvalidBaseUrl> {
        parse_base(
            "apod_base_url",
            self.apod_base_url.as_deref(),
            DEFAULT_APOD_BASE_URL,
        )
    }

    pub fn xkcd_base_url(&self) -> Result<Url, InvalidBaseUrl> {
        parse_base(
            "xkcd_base_url",
            self.xkcd_base_url.as_deref(),
            DEFAULT_XKCD_BASE_URL,
        )
    }

    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(
            self.upstream_timeout_secs
                .unwrap_or(DEFAULT_UPSTREAM_TIMEOUT_SECS),
        )
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for settings parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const KEYS: [&str; 11] = [
        "WAREHOUSE_BIND_ADDR",
        "WAREHOUSE_MONGODB_URL",
        "WAREHOUSE_DATABASE",
        "WAREHOUSE_COLLECTION",
        "WAREHOUSE_STORE_TIMEOUT_SECS",
        "WAREHOUSE_NASA_API_KEY",
        "WAREHOUSE_WEATHER_BASE_URL",
        "WAREHOUSE_APOD_BASE_URL",
        "WAREHOUSE_XKCD_BASE_URL",
        "WAREHOUSE_UPSTREAM_TIMEOUT_SECS",
        "WAREHOUSE_FIXTURE_UPSTREAMS",
    ];

    fn load_from_empty_args() -> WarehouseSettings {
        WarehouseSettings::load_from_iter([OsString::from("backend")]).expect("config should load")
    }

    fn cleared_except(overrides: &[(&'static str, &str)]) -> Vec<(&'static str, Option<String>)> {
        KEYS.iter()
            .map(|key| {
                let value = overrides
                    .iter()
                    .find(|(name, _)| name == key)
                    .map(|(_, value)| (*value).to_owned());
                (*key, value)
            })
            .collect()
    }

    #[rstest]
    fn defaults_apply_when_nothing_is_set() {
        let _guard = lock_env(cleared_except(&[]));

        let settings = load_from_empty_args();
        assert_eq!(settings.bind_addr(), DEFAULT_BIND_ADDR);
        assert!(settings.mongodb_url().is_none());
        assert_eq!(settings.database(), "college");
        assert_eq!(settings.collection(), "students");
        assert_eq!(settings.store_timeout(), Duration::from_secs(5));
        assert_eq!(settings.nasa_api_key(), "DEMO_KEY");
        assert_eq!(
            settings.weather_base_url().expect("default url").as_str(),
            "https://wttr.in/"
        );
        assert_eq!(settings.upstream_timeout(), Duration::from_secs(10));
        assert!(!settings.fixture_upstreams);
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env(cleared_except(&[
            ("WAREHOUSE_BIND_ADDR", "127.0.0.1:9000"),
            ("WAREHOUSE_MONGODB_URL", "mongodb://localhost:27017"),
            ("WAREHOUSE_DATABASE", "campus"),
            ("WAREHOUSE_UPSTREAM_TIMEOUT_SECS", "3"),
            ("WAREHOUSE_XKCD_BASE_URL", "http://127.0.0.1:4000"),
            ("WAREHOUSE_FIXTURE_UPSTREAMS", "true"),
        ]));

        let settings = load_from_empty_args();
        assert_eq!(settings.bind_addr().port(), 9000);
        assert_eq!(settings.mongodb_url(), Some("mongodb://localhost:27017"));
        assert_eq!(settings.database(), "campus");
        assert_eq!(settings.upstream_timeout(), Duration::from_secs(3));
        assert_eq!(
            settings.xkcd_base_url().expect("override url").as_str(),
            "http://127.0.0.1:4000/"
        );
        assert!(settings.fixture_upstreams);
    }

    #[rstest]
    fn blank_mongodb_url_selects_no_store() {
        let _guard = lock_env(cleared_except(&[("WAREHOUSE_MONGODB_URL", "  ")]));
        assert!(load_from_empty_args().mongodb_url().is_none());
    }

    #[rstest]
    fn malformed_base_url_is_reported() {
        let _guard = lock_env(cleared_except(&[("WAREHOUSE_APOD_BASE_URL", "not a url")]));
        let error = load_from_empty_args()
            .apod_base_url()
            .expect_err("invalid url");
        assert!(error.to_string().starts_with("apod_base_url"));
    }
}
