//! Driven port for student record persistence.

use async_trait::async_trait;

use crate::domain::{Student, StudentChangeset, StudentDraft, StudentId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by student repository adapters.
    pub enum StudentRepositoryError {
        /// Store could not be reached or the connection dropped.
        Connection { message: String } =>
            "student repository connection failed: {message}",
        /// Command was rejected or failed while executing.
        Query { message: String } =>
            "student repository query failed: {message}",
        /// Stored document could not be turned back into a record.
        Decode { message: String } =>
            "student repository decode failed: {message}",
    }
}

/// Port for reading and writing student documents.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// Persist a new record and return the store-assigned identifier.
    async fn insert(&self, draft: &StudentDraft) -> Result<StudentId, StudentRepositoryError>;

    /// Fetch one record by identifier.
    async fn find_by_id(&self, id: &StudentId) -> Result<Option<Student>, StudentRepositoryError>;

    /// Fetch up to `limit` records in store order.
    async fn list(&self, limit: usize) -> Result<Vec<Student>, StudentRepositoryError>;

    /// Atomically overwrite the fields named by `changes` and return the
    /// post-update record, or `None` when no record matched.
    async fn apply_changeset(
        &self,
        id: &StudentId,
        changes: &StudentChangeset,
    ) -> Result<Option<Student>, StudentRepositoryError>;

    /// Remove one record and return how many were removed.
    async fn delete(&self, id: &StudentId) -> Result<u64, StudentRepositoryError>;

    /// Round-trip a cheap command to confirm the store answers.
    async fn ping(&self) -> Result<(), StudentRepositoryError>;
}
