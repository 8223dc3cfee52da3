//! Mutex-guarded student repository.
//!
//! Stands in for the document store during local development and tests.
//! Records keep insertion order; identifiers mimic store object ids with a
//! random per-instance prefix and a monotonically increasing counter.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{StudentRepository, StudentRepositoryError};
use crate::domain::{STUDENT_ID_BYTES, Student, StudentChangeset, StudentDraft, StudentId};

/// Student repository holding records in memory.
#[derive(Debug)]
pub struct InMemoryStudentRepository {
    prefix: [u8; 4],
    counter: AtomicU64,
    students: Mutex<Vec<Student>>,
}

impl Default for InMemoryStudentRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStudentRepository {
    #[must_use]
    pub fn new() -> Self {
        Self {
            prefix: rand::random::<u32>().to_be_bytes(),
            counter: AtomicU64::new(1),
            students: Mutex::new(Vec::new()),
        }
    }

    fn next_id(&self) -> StudentId {
        let sequence = self.counter.fetch_add(1, Ordering::Relaxed).to_be_bytes();
        let mut bytes = [0_u8; STUDENT_ID_BYTES];
        let (head, tail) = bytes.split_at_mut(self.prefix.len());
        head.copy_from_slice(&self.prefix);
        tail.copy_from_slice(&sequence);
        StudentId::from_bytes(bytes)
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<Student>>, StudentRepositoryError> {
        self.students
            .lock()
            .map_err(|_| StudentRepositoryError::query("in-memory student store poisoned"))
    }
}

#[async_trait]
impl StudentRepository for InMemoryStudentRepository {
    async fn insert(&self, draft: &StudentDraft) -> Result<StudentId, StudentRepositoryError> {
        let id = self.next_id();
        self.lock()?.push(Student::new(id, draft.clone()));
        Ok(id)
    }

    async fn find_by_id(&self, id: &StudentId) -> Result<Option<Student>, StudentRepositoryError> {
        Ok(self
            .lock()?
            .iter()
            .find(|student| student.id() == *id)
            .cloned())
    }

    async fn list(&self, limit: usize) -> Result<Vec<Student>, StudentRepositoryError> {
        Ok(self.lock()?.iter().take(limit).cloned().collect())
    }

    async fn apply_changeset(
        &self,
        id: &StudentId,
        changes: &StudentChangeset,
    ) -> Result<Option<Student>, StudentRepositoryError> {
        let mut students = self.lock()?;
        let Some(slot) = students.iter_mut().find(|student| student.id() == *id) else {
            return Ok(None);
        };
        let updated = slot.clone().with_changes(changes);
        slot.clone_from(&updated);
        Ok(Some(updated))
    }

    async fn delete(&self, id: &StudentId) -> Result<u64, StudentRepositoryError> {
        let mut students = self.lock()?;
        let before = students.len();
        students.retain(|student| student.id() != *id);
        Ok(u64::from(students.len() != before))
    }

    async fn ping(&self) -> Result<(), StudentRepositoryError> {
        self.lock().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FieldUpdate, Gpa, StudentFields};
    use rstest::{fixture, rstest};

    fn draft(name: &str) -> StudentDraft {
        StudentDraft::try_from(StudentFields {
            name: Some(name.to_owned()),
            email: Some(format!("{}@example.com", name.to_lowercase())),
            course: Some("Math".to_owned()),
            gpa: Some(3.0),
        })
        .expect("valid draft")
    }

    #[fixture]
    fn repo() -> InMemoryStudentRepository {
        InMemoryStudentRepository::new()
    }

    #[rstest]
    #[tokio::test]
    async fn insert_assigns_distinct_ids(repo: InMemoryStudentRepository) {
        let first = repo.insert(&draft("Alice")).await.expect("insert");
        let second = repo.insert(&draft("Bob")).await.expect("insert");
        assert_ne!(first, second);
        assert_eq!(first.to_string().len(), 24);
    }

    #[rstest]
    #[tokio::test]
    async fn list_keeps_insertion_order_and_honours_limit(repo: InMemoryStudentRepository) {
        for name in ["Alice", "Bob", "Carol"] {
            repo.insert(&draft(name)).await.expect("insert");
        }
        let names: Vec<String> = repo
            .list(2)
            .await
            .expect("list")
            .into_iter()
            .map(|student| student.name().to_string())
            .collect();
        assert_eq!(names, ["Alice", "Bob"]);
    }

    #[rstest]
    #[tokio::test]
    async fn apply_changeset_persists_the_update(repo: InMemoryStudentRepository) {
        let id = repo.insert(&draft("Alice")).await.expect("insert");
        let changes = StudentChangeset {
            gpa: FieldUpdate::Set(Gpa::new(3.9).expect("valid gpa")),
            ..StudentChangeset::default()
        };

        let updated = repo
            .apply_changeset(&id, &changes)
            .await
            .expect("update")
            .expect("record matched");
        let stored = repo.find_by_id(&id).await.expect("find").expect("present");

        assert_eq!(updated, stored);
        assert_eq!(stored.gpa().value(), 3.9);
    }

    #[rstest]
    #[tokio::test]
    async fn delete_counts_removed_records(repo: InMemoryStudentRepository) {
        let id = repo.insert(&draft("Alice")).await.expect("insert");
        assert_eq!(repo.delete(&id).await.expect("delete"), 1);
        assert_eq!(repo.delete(&id).await.expect("delete"), 0);
        assert!(repo.find_by_id(&id).await.expect("find").is_none());
    }
}
