//! Student records: identity, schema, and the list envelope.

mod fields;
mod id;
mod schema;

pub use fields::{
    CourseName, EmailAddress, GPA_MAX, GPA_MIN, Gpa, StudentField, StudentName, ViolationKind,
};
pub use id::{STUDENT_ID_BYTES, STUDENT_ID_TEXT_LEN, StudentId, StudentIdError};
pub use schema::{
    FieldUpdate, FieldViolation, StudentChangeset, StudentDraft, StudentFields, StudentSchemaError,
};

/// A persisted student record.
///
/// ## Invariants
/// - `id` was assigned by the store and never changes.
/// - All other fields satisfy the full record schema.
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    id: StudentId,
    name: StudentName,
    email: EmailAddress,
    course: CourseName,
    gpa: Gpa,
}

impl Student {
    /// Attach a store-assigned identifier to a validated draft.
    #[must_use]
    pub fn new(id: StudentId, draft: StudentDraft) -> Self {
        let (name, email, course, gpa) = draft.into_parts();
        Self {
            id,
            name,
            email,
            course,
            gpa,
        }
    }

    /// Rebuild a record from stored values, re-checking the schema.
    ///
    /// The store does not enforce the schema itself, so documents written by
    /// other clients may not satisfy it.
    pub fn try_from_stored(
        id: StudentId,
        name: String,
        email: String,
        course: String,
        gpa: f64,
    ) -> Result<Self, StudentSchemaError> {
        let draft = StudentDraft::try_from(StudentFields {
            name: Some(name),
            email: Some(email),
            course: Some(course),
            gpa: Some(gpa),
        })?;
        Ok(Self::new(id, draft))
    }

    #[must_use]
    pub fn id(&self) -> StudentId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &StudentName {
        &self.name
    }

    #[must_use]
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    #[must_use]
    pub fn course(&self) -> &CourseName {
        &self.course
    }

    #[must_use]
    pub fn gpa(&self) -> Gpa {
        self.gpa
    }

    /// Return the record with the requested fields overwritten.
    ///
    /// The identifier is never part of a change-set.
    #[must_use]
    pub fn with_changes(mut self, changes: &StudentChangeset) -> Self {
        changes.name.apply_to(&mut self.name);
        changes.email.apply_to(&mut self.email);
        changes.course.apply_to(&mut self.course);
        changes.gpa.apply_to(&mut self.gpa);
        self
    }
}

/// Named wrapper around a list of students.
///
/// List responses use this envelope instead of a bare top-level array.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StudentCollection {
    students: Vec<Student>,
}

impl StudentCollection {
    #[must_use]
    pub fn new(students: Vec<Student>) -> Self {
        Self { students }
    }

    #[must_use]
    pub fn students(&self) -> &[Student] {
        &self.students
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.students.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    #[must_use]
    pub fn into_students(self) -> Vec<Student> {
        self.students
    }
}

#[cfg(test)]
mod tests;
