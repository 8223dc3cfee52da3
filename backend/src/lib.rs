//! Warehouse backend library modules.
//!
//! - [`domain`]: student records, upstream request models and ports.
//! - [`inbound`]: HTTP handlers.
//! - [`outbound`]: MongoDB, in-memory and upstream API adapters.

pub mod config;
pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
