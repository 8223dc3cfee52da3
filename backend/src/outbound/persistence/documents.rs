//! Stored document layout for student records.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::domain::{Student, StudentDraft, StudentId, StudentSchemaError};

/// Student document as read back from the collection.
#[derive(Debug, Clone, Deserialize)]
pub(super) struct StudentDocument {
    #[serde(rename = "_id")]
    pub(super) id: ObjectId,
    pub(super) name: String,
    pub(super) email: String,
    pub(super) course: String,
    pub(super) gpa: f64,
}

impl TryFrom<StudentDocument> for Student {
    type Error = StudentSchemaError;

    fn try_from(document: StudentDocument) -> Result<Self, Self::Error> {
        Self::try_from_stored(
            StudentId::from_bytes(document.id.bytes()),
            document.name,
            document.email,
            document.course,
            document.gpa,
        )
    }
}

/// Student document written on insert; the store assigns `_id`.
#[derive(Debug, Clone, Serialize)]
pub(super) struct NewStudentDocument {
    pub(super) name: String,
    pub(super) email: String,
    pub(super) course: String,
    pub(super) gpa: f64,
}

impl From<&StudentDraft> for NewStudentDocument {
    fn from(draft: &StudentDraft) -> Self {
        Self {
            name: draft.name().to_string(),
            email: draft.email().to_string(),
            course: draft.course().to_string(),
            gpa: draft.gpa().value(),
        }
    }
}

pub(super) fn object_id(id: &StudentId) -> ObjectId {
    ObjectId::from_bytes(id.to_bytes())
}
