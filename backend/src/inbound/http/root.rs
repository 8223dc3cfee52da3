//! Root greeting used by browsers and smoke checks.

use actix_web::{get, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Greeting returned while the server is up.
pub const ONLINE_MESSAGE: &str = "yep, here it goes again [Server's online!]";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RootResponse {
    #[schema(example = "yep, here it goes again [Server's online!]")]
    pub message: String,
}

/// Report that the server is online.
#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Server is online", body = RootResponse)),
    tags = ["health"],
    operation_id = "root"
)]
#[get("/")]
pub async fn root() -> web::Json<RootResponse> {
    web::Json(RootResponse {
        message: ONLINE_MESSAGE.to_owned(),
    })
}
