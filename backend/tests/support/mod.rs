//! Shared helpers for HTTP integration tests.

use std::sync::Arc;

use actix_web::dev::{Service, ServiceResponse};
use actix_web::{App, test, web};

use warehouse::Trace;
use warehouse::domain::StudentResourceService;
use warehouse::inbound::http;
use warehouse::inbound::http::health::HealthState;
use warehouse::inbound::http::state::{HttpState, UpstreamPorts};
use warehouse::outbound::memory::InMemoryStudentRepository;

/// The full application over an empty in-memory store and fixture upstreams.
pub async fn test_app()
-> impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error> {
    let service = Arc::new(StudentResourceService::new(Arc::new(
        InMemoryStudentRepository::new(),
    )));
    let health = HealthState::new(service.clone());
    health.mark_ready();
    let state = HttpState::new(service.clone(), service, UpstreamPorts::fixtures());

    test::init_service(
        App::new()
            .app_data(web::Data::new(health))
            .app_data(web::Data::new(state))
            .wrap(Trace)
            .configure(http::configure),
    )
    .await
}
