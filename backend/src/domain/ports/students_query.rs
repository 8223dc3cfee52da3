//! Driving port for student reads.

use async_trait::async_trait;

use crate::domain::{Error, Student, StudentCollection};

/// Use-case port for listing and fetching students.
#[async_trait]
pub trait StudentsQuery: Send + Sync {
    /// Every record up to the list cap, wrapped in the collection envelope.
    async fn list(&self) -> Result<StudentCollection, Error>;

    /// One record by caller-supplied identifier.
    async fn get(&self, id: &str) -> Result<Student, Error>;
}
