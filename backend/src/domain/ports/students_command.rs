//! Driving port for student mutations.
//!
//! Identifiers arrive as caller-supplied text; implementations decode them
//! and report malformed values exactly like unknown ones.

use async_trait::async_trait;

use crate::domain::{Error, Student, StudentChangeset, StudentDraft};

/// Use-case port for creating, updating and deleting students.
#[async_trait]
pub trait StudentsCommand: Send + Sync {
    /// Persist a validated record and return it with its new identifier.
    async fn create(&self, draft: StudentDraft) -> Result<Student, Error>;

    /// Apply a partial update and return the resulting record.
    async fn update(&self, id: &str, changes: StudentChangeset) -> Result<Student, Error>;

    /// Remove a record.
    async fn delete(&self, id: &str) -> Result<(), Error>;
}
