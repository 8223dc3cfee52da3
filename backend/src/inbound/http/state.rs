//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only depend
//! on domain ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    ApodSource, ComicSource, FixtureApodSource, FixtureComicSource, FixtureWeatherSource,
    StudentsCommand, StudentsQuery, WeatherSource,
};

/// Driven ports for the pass-through endpoints.
#[derive(Clone)]
pub struct UpstreamPorts {
    pub weather: Arc<dyn WeatherSource>,
    pub apod: Arc<dyn ApodSource>,
    pub comics: Arc<dyn ComicSource>,
}

impl UpstreamPorts {
    /// Canned sources that never leave the process.
    #[must_use]
    pub fn fixtures() -> Self {
        Self {
            weather: Arc::new(FixtureWeatherSource),
            apod: Arc::new(FixtureApodSource::default()),
            comics: Arc::new(FixtureComicSource),
        }
    }
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub students: Arc<dyn StudentsCommand>,
    pub students_query: Arc<dyn StudentsQuery>,
    pub weather: Arc<dyn WeatherSource>,
    pub apod: Arc<dyn ApodSource>,
    pub comics: Arc<dyn ComicSource>,
}

impl HttpState {
    /// Construct state from the student use-cases and upstream sources.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use warehouse::domain::StudentResourceService;
    /// use warehouse::inbound::http::state::{HttpState, UpstreamPorts};
    /// use warehouse::outbound::memory::InMemoryStudentRepository;
    ///
    /// let service = Arc::new(StudentResourceService::new(Arc::new(
    ///     InMemoryStudentRepository::new(),
    /// )));
    /// let state = HttpState::new(service.clone(), service, UpstreamPorts::fixtures());
    /// let _comics = state.comics.clone();
    /// ```
    pub fn new(
        students: Arc<dyn StudentsCommand>,
        students_query: Arc<dyn StudentsQuery>,
        upstreams: UpstreamPorts,
    ) -> Self {
        let UpstreamPorts {
            weather,
            apod,
            comics,
        } = upstreams;
        Self {
            students,
            students_query,
            weather,
            apod,
            comics,
        }
    }
}
