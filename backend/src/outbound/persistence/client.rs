//! Store connection settings and client construction.

use std::time::Duration;

use mongodb::options::ClientOptions;
use mongodb::{Client, Collection};

const APP_NAME: &str = "warehouse";

/// Errors raised while preparing the store client.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreConnectError {
    /// Connection string could not be parsed or resolved.
    #[error("invalid store connection string: {message}")]
    InvalidUrl { message: String },
}

/// Where and how to reach the student collection.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use warehouse::outbound::persistence::StoreConfig;
///
/// let config = StoreConfig::new("mongodb://localhost:27017")
///     .with_database("college")
///     .with_collection("students")
///     .with_server_selection_timeout(Duration::from_secs(2));
/// assert_eq!(config.database(), "college");
/// ```
#[derive(Debug, Clone)]
pub struct StoreConfig {
    url: String,
    database: String,
    collection: String,
    server_selection_timeout: Duration,
}

impl StoreConfig {
    /// Defaults: database `college`, collection `students`, 5 second
    /// server-selection timeout.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            database: "college".to_owned(),
            collection: "students".to_owned(),
            server_selection_timeout: Duration::from_secs(5),
        }
    }

    #[must_use]
    pub fn with_database(mut self, database: impl Into<String>) -> Self {
        self.database = database.into();
        self
    }

    #[must_use]
    pub fn with_collection(mut self, collection: impl Into<String>) -> Self {
        self.collection = collection.into();
        self
    }

    #[must_use]
    pub fn with_server_selection_timeout(mut self, timeout: Duration) -> Self {
        self.server_selection_timeout = timeout;
        self
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    #[must_use]
    pub fn database(&self) -> &str {
        &self.database
    }

    #[must_use]
    pub fn collection(&self) -> &str {
        &self.collection
    }
}

/// Build a client for `config` and open the configured collection.
///
/// The driver connects lazily, so an unreachable store surfaces on the first
/// command rather than here.
pub(super) async fn open_collection<T>(
    config: &StoreConfig,
) -> Result<(Client, Collection<T>), StoreConnectError>
where
    T: Send + Sync,
{
    let mut options = ClientOptions::parse(config.url())
        .await
        .map_err(|err| StoreConnectError::InvalidUrl {
            message: err.to_string(),
        })?;
    options.app_name = Some(APP_NAME.to_owned());
    options.server_selection_timeout = Some(config.server_selection_timeout);

    let client = Client::with_options(options).map_err(|err| StoreConnectError::InvalidUrl {
        message: err.to_string(),
    })?;
    let collection = client
        .database(config.database())
        .collection::<T>(config.collection());
    Ok((client, collection))
}
