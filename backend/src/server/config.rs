//! HTTP server configuration object.

use std::net::SocketAddr;
use std::sync::Arc;

use warehouse::domain::ports::StudentRepository;
use warehouse::inbound::http::state::UpstreamPorts;

/// Everything the server needs besides its health state.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) repository: Arc<dyn StudentRepository>,
    pub(crate) upstreams: UpstreamPorts,
}

impl ServerConfig {
    #[must_use]
    pub fn new(
        bind_addr: SocketAddr,
        repository: Arc<dyn StudentRepository>,
        upstreams: UpstreamPorts,
    ) -> Self {
        Self {
            bind_addr,
            repository,
            upstreams,
        }
    }
}
