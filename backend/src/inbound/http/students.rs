//! Student CRUD handlers.
//!
//! ```text
//! POST   /students/      {"name":"Alice","email":"alice@example.com","course":"Math","gpa":3.8}
//! GET    /students/
//! GET    /students/{id}
//! PUT    /students/{id}  {"gpa":3.9}
//! DELETE /students/{id}
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::domain::{
    Student, StudentChangeset, StudentCollection, StudentDraft, StudentField,
    StudentFields, StudentSchemaError, ViolationKind,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::schema_error;

/// Request body for `POST /students/`.
///
/// The identifier is assigned by the store; supplying one (as `id` or `_id`)
/// is rejected.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[schema(example = json!({
    "name": "Jane Doe",
    "email": "jdoe@example.com",
    "course": "Experiments, Science, and Fashion in Nanophotonics",
    "gpa": 3.0
}))]
pub struct CreateStudentRequest {
    #[serde(default, alias = "_id", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>, read_only)]
    pub id: Option<Value>,
    #[schema(value_type = String, required = true)]
    pub name: Option<String>,
    #[schema(value_type = String, required = true, format = "email")]
    pub email: Option<String>,
    #[schema(value_type = String, required = true)]
    pub course: Option<String>,
    #[schema(value_type = f64, required = true, minimum = 0.0, maximum = 4.0)]
    pub gpa: Option<f64>,
}

impl TryFrom<CreateStudentRequest> for StudentDraft {
    type Error = StudentSchemaError;

    fn try_from(request: CreateStudentRequest) -> Result<Self, Self::Error> {
        let CreateStudentRequest {
            id,
            name,
            email,
            course,
            gpa,
        } = request;
        let id_violation = id
            .filter(|value| !value.is_null())
            .map(|_| StudentSchemaError::single(StudentField::Id, ViolationKind::ReadOnly));
        let draft = Self::try_from(StudentFields {
            name,
            email,
            course,
            gpa,
        });

        match (id_violation, draft) {
            (None, draft) => draft,
            (Some(violation), Ok(_)) => Err(violation),
            (Some(violation), Err(other)) => Err(violation.merge(other)),
        }
    }
}

/// Request body for `PUT /students/{id}`.
///
/// Absent and `null` fields leave the stored value untouched.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[schema(example = json!({ "course": "Physics", "gpa": 3.9 }))]
pub struct UpdateStudentRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    #[schema(format = "email")]
    pub email: Option<String>,
    #[serde(default)]
    pub course: Option<String>,
    #[serde(default)]
    #[schema(minimum = 0.0, maximum = 4.0)]
    pub gpa: Option<f64>,
}

impl TryFrom<UpdateStudentRequest> for StudentChangeset {
    type Error = StudentSchemaError;

    fn try_from(request: UpdateStudentRequest) -> Result<Self, Self::Error> {
        Self::try_from(StudentFields {
            name: request.name,
            email: request.email,
            course: request.course,
            gpa: request.gpa,
        })
    }
}

/// A persisted student record.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct StudentResponse {
    #[schema(example = "65f0c0ffee0000000000beef")]
    pub id: String,
    #[schema(example = "Jane Doe")]
    pub name: String,
    #[schema(example = "jdoe@example.com")]
    pub email: String,
    #[schema(example = "Experiments, Science, and Fashion in Nanophotonics")]
    pub course: String,
    #[schema(example = 3.0)]
    pub gpa: f64,
}

impl From<Student> for StudentResponse {
    fn from(student: Student) -> Self {
        Self {
            id: student.id().to_string(),
            gpa: student.gpa().value(),
            name: student.name().to_string(),
            email: student.email().to_string(),
            course: student.course().to_string(),
        }
    }
}

/// Envelope for `GET /students/`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct StudentCollectionResponse {
    pub students: Vec<StudentResponse>,
}

impl From<StudentCollection> for StudentCollectionResponse {
    fn from(collection: StudentCollection) -> Self {
        Self {
            students: collection
                .into_students()
                .into_iter()
                .map(StudentResponse::from)
                .collect(),
        }
    }
}

/// Insert a new student record; the response carries its new `id`.
#[utoipa::path(
    post,
    path = "/students/",
    request_body = CreateStudentRequest,
    responses(
        (status = 201, description = "Student created", body = StudentResponse),
        (status = 422, description = "Schema violation", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["students"],
    operation_id = "createStudent"
)]
#[post("/students/")]
pub async fn create_student(
    state: web::Data<HttpState>,
    payload: web::Json<CreateStudentRequest>,
) -> ApiResult<HttpResponse> {
    let draft = StudentDraft::try_from(payload.into_inner()).map_err(|err| schema_error(&err))?;
    let student = state.students.create(draft).await?;
    Ok(HttpResponse::Created().json(StudentResponse::from(student)))
}

/// List student records, at most 1000, in store order.
#[utoipa::path(
    get,
    path = "/students/",
    responses(
        (status = 200, description = "Students", body = StudentCollectionResponse),
        (status = 503, description = "Store unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["students"],
    operation_id = "listStudents"
)]
#[get("/students/")]
pub async fn list_students(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<StudentCollectionResponse>> {
    let collection = state.students_query.list().await?;
    Ok(web::Json(collection.into()))
}

/// Fetch one student record by `id`.
#[utoipa::path(
    get,
    path = "/students/{id}",
    params(("id" = String, Path, description = "24-character hexadecimal identifier")),
    responses(
        (status = 200, description = "Student", body = StudentResponse),
        (status = 404, description = "Unknown or malformed id", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["students"],
    operation_id = "getStudent"
)]
#[get("/students/{id}")]
pub async fn get_student(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<StudentResponse>> {
    let student = state.students_query.get(&path.into_inner()).await?;
    Ok(web::Json(student.into()))
}

/// Overwrite the supplied fields of a student record.
///
/// An empty body returns the record unchanged.
#[utoipa::path(
    put,
    path = "/students/{id}",
    params(("id" = String, Path, description = "24-character hexadecimal identifier")),
    request_body = UpdateStudentRequest,
    responses(
        (status = 200, description = "Updated student", body = StudentResponse),
        (status = 404, description = "Unknown or malformed id", body = ErrorSchema),
        (status = 422, description = "Schema violation", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["students"],
    operation_id = "updateStudent"
)]
#[put("/students/{id}")]
pub async fn update_student(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<UpdateStudentRequest>,
) -> ApiResult<web::Json<StudentResponse>> {
    let changes =
        StudentChangeset::try_from(payload.into_inner()).map_err(|err| schema_error(&err))?;
    let student = state.students.update(&path.into_inner(), changes).await?;
    Ok(web::Json(student.into()))
}

/// Remove a student record.
#[utoipa::path(
    delete,
    path = "/students/{id}",
    params(("id" = String, Path, description = "24-character hexadecimal identifier")),
    responses(
        (status = 204, description = "Student deleted"),
        (status = 404, description = "Unknown or malformed id", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["students"],
    operation_id = "deleteStudent"
)]
#[delete("/students/{id}")]
pub async fn delete_student(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    state.students.delete(&path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}
