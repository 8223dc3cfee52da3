//! MongoDB persistence adapters.
//!
//! Document structs (`documents.rs`) are internal: the repository translates
//! them into domain records on every read and never leaks driver types past
//! the port boundary.
//!
//! # Example
//!
//! ```ignore
//! use warehouse::outbound::persistence::{MongoStudentRepository, StoreConfig};
//!
//! let config = StoreConfig::new("mongodb://localhost:27017");
//! let repo = MongoStudentRepository::connect(&config).await?;
//! ```

mod client;
mod documents;
mod error_mapping;
mod mongo_student_repository;

pub use client::{StoreConfig, StoreConnectError};
pub use mongo_student_repository::MongoStudentRepository;
