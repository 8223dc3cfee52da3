//! Student resource manager.
//!
//! Implements the student driving ports over a [`StudentRepository`]:
//! decodes caller identifiers, enforces partial-update semantics and maps
//! repository failures onto API errors.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::domain::ports::{
    ReadinessProbe, StudentRepository, StudentRepositoryError, StudentsCommand, StudentsQuery,
};
use crate::domain::{Error, Student, StudentChangeset, StudentCollection, StudentDraft, StudentId};

/// Maximum number of records returned by a list call.
pub const STUDENT_LIST_LIMIT: usize = 1000;

fn not_found(id: &str) -> Error {
    Error::not_found(format!("Student {id} not found"))
}

fn map_repository_error(error: StudentRepositoryError) -> Error {
    warn!(kind = error.kind(), %error, "student repository call failed");
    match error {
        StudentRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("student store unavailable: {message}"))
        }
        StudentRepositoryError::Query { message } => {
            Error::internal(format!("student store error: {message}"))
        }
        StudentRepositoryError::Decode { message } => {
            Error::internal(format!("stored student could not be decoded: {message}"))
        }
    }
}

/// Student use-cases backed by a repository port.
pub struct StudentResourceService<R: ?Sized> {
    repository: Arc<R>,
}

impl<R: ?Sized> Clone for StudentResourceService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: ?Sized> StudentResourceService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

impl<R> StudentResourceService<R>
where
    R: StudentRepository + ?Sized,
{
    /// Decode a caller identifier; malformed text is reported as not found.
    fn decode(id: &str) -> Result<StudentId, Error> {
        StudentId::parse(id).map_err(|err| {
            debug!(student_id = id, %err, "rejected malformed student id");
            not_found(id)
        })
    }

    async fn find(&self, id: &StudentId) -> Result<Option<Student>, Error> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(map_repository_error)
    }
}

#[async_trait]
impl<R> StudentsCommand for StudentResourceService<R>
where
    R: StudentRepository + ?Sized,
{
    async fn create(&self, draft: StudentDraft) -> Result<Student, Error> {
        let id = self
            .repository
            .insert(&draft)
            .await
            .map_err(map_repository_error)?;
        let student = self.find(&id).await?.ok_or_else(|| {
            Error::internal(format!("student {id} missing immediately after insert"))
        })?;
        debug!(student_id = %id, "student created");
        Ok(student)
    }

    async fn update(&self, id: &str, changes: StudentChangeset) -> Result<Student, Error> {
        let student_id = Self::decode(id)?;

        let updated = if changes.is_empty() {
            self.find(&student_id).await?
        } else {
            self.repository
                .apply_changeset(&student_id, &changes)
                .await
                .map_err(map_repository_error)?
        };

        let student = updated.ok_or_else(|| not_found(id))?;
        debug!(
            student_id = %student_id,
            changed = ?changes.changed_fields(),
            "student updated"
        );
        Ok(student)
    }

    async fn delete(&self, id: &str) -> Result<(), Error> {
        let student_id = Self::decode(id)?;
        let removed = self
            .repository
            .delete(&student_id)
            .await
            .map_err(map_repository_error)?;
        if removed == 0 {
            return Err(not_found(id));
        }
        debug!(student_id = %student_id, "student deleted");
        Ok(())
    }
}

#[async_trait]
impl<R> StudentsQuery for StudentResourceService<R>
where
    R: StudentRepository + ?Sized,
{
    async fn list(&self) -> Result<StudentCollection, Error> {
        let students = self
            .repository
            .list(STUDENT_LIST_LIMIT)
            .await
            .map_err(map_repository_error)?;
        debug!(count = students.len(), "students listed");
        Ok(StudentCollection::new(students))
    }

    async fn get(&self, id: &str) -> Result<Student, Error> {
        let student_id = Self::decode(id)?;
        self.find(&student_id).await?.ok_or_else(|| not_found(id))
    }
}

#[async_trait]
impl<R> ReadinessProbe for StudentResourceService<R>
where
    R: StudentRepository + ?Sized,
{
    async fn check(&self) -> Result<(), Error> {
        self.repository.ping().await.map_err(map_repository_error)
    }
}

#[cfg(test)]
#[path = "student_service_tests.rs"]
mod tests;
