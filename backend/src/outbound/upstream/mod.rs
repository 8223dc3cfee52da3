//! Reqwest-backed adapters for the third-party pass-through APIs.
//!
//! Each adapter owns transport details only: URL construction, timeout and
//! status mapping, and decoding the upstream JSON into domain values.

mod dto;
mod http;
mod nasa_apod;
mod wttr;
mod xkcd;

pub use http::UpstreamEndpoint;
pub use nasa_apod::NasaApodSource;
pub use wttr::WttrWeatherSource;
pub use xkcd::XkcdComicSource;
