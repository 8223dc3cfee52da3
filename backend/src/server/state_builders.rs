//! Builders selecting the student store and upstream adapters from settings.

use std::sync::Arc;

use thiserror::Error;
use tracing::{info, warn};

use warehouse::config::{InvalidBaseUrl, WarehouseSettings};
use warehouse::domain::ports::StudentRepository;
use warehouse::inbound::http::state::UpstreamPorts;
use warehouse::outbound::memory::InMemoryStudentRepository;
use warehouse::outbound::persistence::{MongoStudentRepository, StoreConfig, StoreConnectError};
use warehouse::outbound::upstream::{
    NasaApodSource, UpstreamEndpoint, WttrWeatherSource, XkcdComicSource,
};

/// Startup failures while wiring adapters.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error(transparent)]
    Store(#[from] StoreConnectError),
    #[error(transparent)]
    BaseUrl(#[from] InvalidBaseUrl),
    #[error("failed to build upstream HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// MongoDB when a connection string is configured, otherwise in-memory.
pub async fn build_repository(
    settings: &WarehouseSettings,
) -> Result<Arc<dyn StudentRepository>, BuildError> {
    let Some(url) = settings.mongodb_url() else {
        warn!("no MongoDB URL configured; student records are kept in memory");
        return Ok(Arc::new(InMemoryStudentRepository::new()));
    };
    let config = StoreConfig::new(url)
        .with_database(settings.database())
        .with_collection(settings.collection())
        .with_server_selection_timeout(settings.store_timeout());
    let repository = MongoStudentRepository::connect(&config).await?;
    info!(
        database = config.database(),
        collection = config.collection(),
        "student store configured"
    );
    Ok(Arc::new(repository))
}

/// Fixture sources when requested, otherwise HTTP adapters per upstream.
pub fn build_upstreams(settings: &WarehouseSettings) -> Result<UpstreamPorts, BuildError> {
    if settings.fixture_upstreams {
        info!("serving fixture upstream data");
        return Ok(UpstreamPorts::fixtures());
    }
    let timeout = settings.upstream_timeout();
    let weather = UpstreamEndpoint::new(settings.weather_base_url()?, timeout)?;
    let apod = UpstreamEndpoint::new(settings.apod_base_url()?, timeout)?;
    let comics = UpstreamEndpoint::new(settings.xkcd_base_url()?, timeout)?;
    Ok(UpstreamPorts {
        weather: Arc::new(WttrWeatherSource::new(weather)),
        apod: Arc::new(NasaApodSource::new(apod, settings.nasa_api_key())),
        comics: Arc::new(XkcdComicSource::new(comics)),
    })
}
