//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint of the inbound layer plus the
//! schema wrappers ([`ErrorSchema`], [`ErrorCodeSchema`]) that describe
//! domain types without coupling them to utoipa.
//!
//! The document backs Swagger UI in debug builds and is exported via
//! `cargo run --bin openapi-dump` for external tooling.

use utoipa::OpenApi;

use crate::inbound::http::apod::ApodEntryResponse;
use crate::inbound::http::root::RootResponse;
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};
use crate::inbound::http::students::{
    CreateStudentRequest, StudentCollectionResponse, StudentResponse, UpdateStudentRequest,
};
use crate::inbound::http::weather::WeatherResponse;
use crate::inbound::http::xkcd::ComicResponse;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Warehouse API",
        description = "Student records backed by a document store, plus weather, APOD and XKCD pass-through endpoints.",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::root::root,
        crate::inbound::http::students::create_student,
        crate::inbound::http::students::list_students,
        crate::inbound::http::students::get_student,
        crate::inbound::http::students::update_student,
        crate::inbound::http::students::delete_student,
        crate::inbound::http::weather::current_weather,
        crate::inbound::http::apod::picture_of_the_day,
        crate::inbound::http::xkcd::latest_comic,
        crate::inbound::http::xkcd::comic_by_number,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorSchema,
        ErrorCodeSchema,
        CreateStudentRequest,
        UpdateStudentRequest,
        StudentResponse,
        StudentCollectionResponse,
        WeatherResponse,
        ApodEntryResponse,
        ComicResponse,
        RootResponse,
    )),
    tags(
        (name = "students", description = "Student record CRUD"),
        (name = "weather", description = "Current conditions from wttr.in"),
        (name = "apod", description = "NASA Astronomy Picture of the Day"),
        (name = "xkcd", description = "XKCD comics"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    // utoipa replaces :: with . in schema names
    const ERROR_SCHEMA_NAME: &str = "crate.domain.Error";

    #[rstest]
    fn error_schema_has_code_and_message() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        match schemas.get(ERROR_SCHEMA_NAME).expect("Error schema") {
            RefOr::T(Schema::Object(obj)) => {
                assert!(obj.properties.contains_key("code"));
                assert!(obj.properties.contains_key("message"));
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[rstest]
    #[case("/students/")]
    #[case("/students/{id}")]
    #[case("/weather/{region}")]
    #[case("/apod")]
    #[case("/xkcd")]
    #[case("/xkcd/{num}")]
    #[case("/health/ready")]
    #[case("/")]
    fn every_endpoint_is_documented(#[case] path: &str) {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key(path), "missing {path}");
    }

    #[rstest]
    fn student_item_path_documents_three_methods() {
        let doc = ApiDoc::openapi();
        let item = doc.paths.paths.get("/students/{id}").expect("item path");
        assert!(item.get.is_some());
        assert!(item.put.is_some());
        assert!(item.delete.is_some());
    }
}
