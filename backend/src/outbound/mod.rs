//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: MongoDB-backed student repository
//! - **memory**: in-process student repository for development and tests
//! - **upstream**: reqwest clients for wttr.in, NASA APOD and XKCD
//!
//! Adapters are thin translators between domain types and infrastructure
//! representations. They contain no business logic.

pub mod memory;
pub mod persistence;
pub mod upstream;
