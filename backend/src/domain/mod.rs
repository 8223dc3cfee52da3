//! Domain primitives, services and ports.
//!
//! Purpose: define the student record and the upstream request models
//! independently of HTTP and of the document store. Inbound adapters talk to
//! the driving ports ([`ports::StudentsCommand`], [`ports::StudentsQuery`]);
//! outbound adapters implement the driven ones.
//!
//! Public surface:
//! - Error / ErrorCode: API error payload and its stable codes.
//! - TraceId: per-request correlation identifier.
//! - Student and its schema types: identifier codec, full and partial
//!   validation, collection envelope.
//! - WeatherRegion, ApodRequest, ComicSelector: validated upstream requests.
//! - StudentResourceService: the student use-cases over a repository port.

pub mod apod;
pub mod comic;
pub mod error;
pub mod ports;
pub mod student;
mod student_service;
pub mod trace_id;
pub mod weather;

pub use self::apod::{
    APOD_FIRST_DATE, APOD_MAX_COUNT, ApodEntry, ApodQuery, ApodQueryError, ApodRequest,
    ApodSelection,
};
pub use self::comic::{Comic, ComicNumberError, ComicSelector};
pub use self::error::{Error, ErrorCode, ErrorValidationError, TRACE_ID_HEADER};
pub use self::student::{
    CourseName, EmailAddress, FieldUpdate, FieldViolation, GPA_MAX, GPA_MIN, Gpa,
    STUDENT_ID_BYTES, STUDENT_ID_TEXT_LEN, Student, StudentChangeset, StudentCollection,
    StudentDraft, StudentField, StudentFields, StudentId, StudentIdError, StudentName,
    StudentSchemaError, ViolationKind,
};
pub use self::student_service::{STUDENT_LIST_LIMIT, StudentResourceService};
pub use self::trace_id::TraceId;
pub use self::weather::{WEATHER_REGION_MAX_LEN, WeatherRegion, WeatherRegionError, WeatherReport};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use warehouse::domain::{ApiResult, Error};
///
/// fn lookup() -> ApiResult<()> {
///     Err(Error::not_found("Student 65f0c0ffee0000000000beef not found"))
/// }
/// assert!(lookup().is_err());
/// ```
pub type ApiResult<T> = Result<T, Error>;
