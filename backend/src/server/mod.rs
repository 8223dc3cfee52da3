//! Server construction and middleware wiring.

mod config;
mod state_builders;

pub use config::ServerConfig;
pub use state_builders::{BuildError, build_repository, build_upstreams};

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

use warehouse::Trace;
#[cfg(debug_assertions)]
use warehouse::doc::ApiDoc;
use warehouse::domain::StudentResourceService;
use warehouse::domain::ports::StudentRepository;
use warehouse::inbound::http;
use warehouse::inbound::http::health::HealthState;
use warehouse::inbound::http::state::HttpState;

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Cors::permissive())
        .wrap(Trace)
        .configure(http::configure);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct the Actix HTTP server.
///
/// The health state is marked ready once the socket is bound; readiness
/// additionally requires the store to answer a ping.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(config: ServerConfig) -> std::io::Result<Server> {
    let ServerConfig {
        bind_addr,
        repository,
        upstreams,
    } = config;

    let service: Arc<StudentResourceService<dyn StudentRepository>> =
        Arc::new(StudentResourceService::new(repository));
    let health_state = web::Data::new(HealthState::new(service.clone()));
    let http_state = web::Data::new(HttpState::new(service.clone(), service, upstreams));

    let server_health_state = health_state.clone();
    let server = HttpServer::new(move || build_app(server_health_state.clone(), http_state.clone()))
        .bind(bind_addr)?
        .run();

    health_state.mark_ready();
    Ok(server)
}
