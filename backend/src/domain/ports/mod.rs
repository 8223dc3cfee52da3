//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod apod_source;
mod comic_source;
mod readiness_probe;
mod student_repository;
mod students_command;
mod students_query;
mod upstream_error;
mod weather_source;

#[cfg(test)]
pub use apod_source::MockApodSource;
pub use apod_source::{ApodSource, FixtureApodSource};
#[cfg(test)]
pub use comic_source::MockComicSource;
pub use comic_source::{ComicSource, FIXTURE_LATEST_COMIC, FixtureComicSource};
pub use readiness_probe::{FixtureReadinessProbe, ReadinessProbe};
#[cfg(test)]
pub use student_repository::MockStudentRepository;
pub use student_repository::{StudentRepository, StudentRepositoryError};
pub use students_command::StudentsCommand;
pub use students_query::StudentsQuery;
pub use upstream_error::UpstreamSourceError;
#[cfg(test)]
pub use weather_source::MockWeatherSource;
pub use weather_source::{FixtureWeatherSource, WeatherSource};
