//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::web;

use crate::domain::StudentResourceService;
use crate::inbound::http::state::{HttpState, UpstreamPorts};
use crate::outbound::memory::InMemoryStudentRepository;

/// Handler state over an empty in-memory store and the given upstreams.
pub fn state_with(upstreams: UpstreamPorts) -> web::Data<HttpState> {
    let service = Arc::new(StudentResourceService::new(Arc::new(
        InMemoryStudentRepository::new(),
    )));
    web::Data::new(HttpState::new(service.clone(), service, upstreams))
}

/// Handler state over an empty in-memory store and fixture upstreams.
pub fn fixture_state() -> web::Data<HttpState> {
    state_with(UpstreamPorts::fixtures())
}
