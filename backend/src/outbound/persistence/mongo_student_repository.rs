//! MongoDB-backed student repository.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{self, Document, doc};
use mongodb::options::ReturnDocument;
use mongodb::{Client, Collection};
use tracing::{debug, warn};

use super::client::{StoreConfig, StoreConnectError, open_collection};
use super::documents::{NewStudentDocument, StudentDocument, object_id};
use super::error_mapping::map_mongo_error;
use crate::domain::ports::{StudentRepository, StudentRepositoryError};
use crate::domain::{Student, StudentChangeset, StudentDraft, StudentId};

/// Student repository over one MongoDB collection.
#[derive(Clone)]
pub struct MongoStudentRepository {
    client: Client,
    database: String,
    students: Collection<StudentDocument>,
}

impl MongoStudentRepository {
    /// Build the repository for the collection named in `config`.
    pub async fn connect(config: &StoreConfig) -> Result<Self, StoreConnectError> {
        let (client, students) = open_collection::<StudentDocument>(config).await?;
        Ok(Self {
            client,
            database: config.database().to_owned(),
            students,
        })
    }

    fn decode(document: StudentDocument) -> Result<Student, StudentRepositoryError> {
        let id = document.id;
        Student::try_from(document).map_err(|err| {
            StudentRepositoryError::decode(format!("student {} is invalid: {err}", id.to_hex()))
        })
    }
}

/// Decode listed documents, dropping the ones that no longer fit the schema.
///
/// Each skipped document is logged with its `_id`; the call still succeeds.
fn keep_valid(documents: Vec<Document>) -> Vec<Student> {
    documents
        .into_iter()
        .filter_map(|document| {
            let stored_id = document.get_object_id("_id").map(ObjectId::to_hex).ok();
            let decoded = bson::from_document::<StudentDocument>(document)
                .map_err(|err| StudentRepositoryError::decode(err.to_string()))
                .and_then(MongoStudentRepository::decode);
            match decoded {
                Ok(student) => Some(student),
                Err(error) => {
                    warn!(
                        student_id = stored_id.as_deref().unwrap_or("unknown"),
                        %error,
                        "skipping stored student that fails the schema"
                    );
                    None
                }
            }
        })
        .collect()
}

/// `$set` document holding only the fields `changes` overwrites.
fn set_document(changes: &StudentChangeset) -> Document {
    let mut set = Document::new();
    if let Some(name) = changes.name.as_set() {
        set.insert("name", name.as_ref());
    }
    if let Some(email) = changes.email.as_set() {
        set.insert("email", email.as_ref());
    }
    if let Some(course) = changes.course.as_set() {
        set.insert("course", course.as_ref());
    }
    if let Some(gpa) = changes.gpa.as_set() {
        set.insert("gpa", gpa.value());
    }
    set
}

#[async_trait]
impl StudentRepository for MongoStudentRepository {
    async fn insert(&self, draft: &StudentDraft) -> Result<StudentId, StudentRepositoryError> {
        let result = self
            .students
            .clone_with_type::<NewStudentDocument>()
            .insert_one(NewStudentDocument::from(draft))
            .await
            .map_err(|err| map_mongo_error(&err))?;
        let oid = result.inserted_id.as_object_id().ok_or_else(|| {
            StudentRepositoryError::decode(format!(
                "store assigned a non-object id: {}",
                result.inserted_id
            ))
        })?;
        debug!(student_id = %oid.to_hex(), "student document inserted");
        Ok(StudentId::from_bytes(oid.bytes()))
    }

    async fn find_by_id(&self, id: &StudentId) -> Result<Option<Student>, StudentRepositoryError> {
        self.students
            .find_one(doc! { "_id": object_id(id) })
            .await
            .map_err(|err| map_mongo_error(&err))?
            .map(Self::decode)
            .transpose()
    }

    async fn list(&self, limit: usize) -> Result<Vec<Student>, StudentRepositoryError> {
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        let documents: Vec<Document> = self
            .students
            .clone_with_type::<Document>()
            .find(doc! {})
            .limit(limit)
            .await
            .map_err(|err| map_mongo_error(&err))?
            .try_collect()
            .await
            .map_err(|err| map_mongo_error(&err))?;
        Ok(keep_valid(documents))
    }

    async fn apply_changeset(
        &self,
        id: &StudentId,
        changes: &StudentChangeset,
    ) -> Result<Option<Student>, StudentRepositoryError> {
        self.students
            .find_one_and_update(
                doc! { "_id": object_id(id) },
                doc! { "$set": set_document(changes) },
            )
            .return_document(ReturnDocument::After)
            .await
            .map_err(|err| map_mongo_error(&err))?
            .map(Self::decode)
            .transpose()
    }

    async fn delete(&self, id: &StudentId) -> Result<u64, StudentRepositoryError> {
        let result = self
            .students
            .delete_one(doc! { "_id": object_id(id) })
            .await
            .map_err(|err| map_mongo_error(&err))?;
        Ok(result.deleted_count)
    }

    async fn ping(&self) -> Result<(), StudentRepositoryError> {
        self.client
            .database(&self.database)
            .run_command(doc! { "ping": 1 })
            .await
            .map(|_| ())
            .map_err(|err| map_mongo_error(&err))
    }
}
