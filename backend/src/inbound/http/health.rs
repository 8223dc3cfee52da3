//! Health endpoints: liveness and readiness probes for orchestrators.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use actix_web::{HttpResponse, get, http::header, web};
use tracing::warn;

use crate::domain::ports::{FixtureReadinessProbe, ReadinessProbe};

/// Shared health state for readiness and liveness checks.
pub struct HealthState {
    ready: AtomicBool,
    live: AtomicBool,
    store: Arc<dyn ReadinessProbe>,
}

impl Default for HealthState {
    fn default() -> Self {
        Self::new(Arc::new(FixtureReadinessProbe))
    }
}

impl HealthState {
    /// Start as live but not ready; readiness also requires `store` to pass.
    pub fn new(store: Arc<dyn ReadinessProbe>) -> Self {
        Self {
            ready: AtomicBool::new(false),
            live: AtomicBool::new(true),
            store,
        }
    }

    /// Mark the server as started.
    pub fn mark_ready(&self) {
        self.ready.store(true, Ordering::Release);
    }

    /// Fail liveness checks, e.g. while draining for shutdown.
    pub fn mark_unhealthy(&self) {
        self.live.store(false, Ordering::Release);
    }

    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }

    pub fn is_alive(&self) -> bool {
        self.live.load(Ordering::Acquire)
    }

    async fn store_answers(&self) -> bool {
        match self.store.check().await {
            Ok(()) => true,
            Err(error) => {
                warn!(message = error.message(), "readiness probe: store check failed");
                false
            }
        }
    }

    fn probe_response(probe_ok: bool) -> HttpResponse {
        let mut response = if probe_ok {
            HttpResponse::Ok()
        } else {
            HttpResponse::ServiceUnavailable()
        };
        response
            .insert_header((header::CACHE_CONTROL, "no-store"))
            .finish()
    }
}

/// Readiness probe: 200 once started and the store answers, 503 otherwise.
#[utoipa::path(
    get,
    path = "/health/ready",
    tags = ["health"],
    responses(
        (status = 200, description = "Server is ready to handle traffic"),
        (status = 503, description = "Server has not started or the store is unreachable")
    )
)]
#[get("/health/ready")]
pub async fn ready(state: web::Data<HealthState>) -> HttpResponse {
    let ok = state.is_ready() && state.store_answers().await;
    HealthState::probe_response(ok)
}

/// Liveness probe: 200 while the process is marked alive.
#[utoipa::path(
    get,
    path = "/health/live",
    tags = ["health"],
    responses(
        (status = 200, description = "Server is alive"),
        (status = 503, description = "Server is shutting down")
    )
)]
#[get("/health/live")]
pub async fn live(state: web::Data<HealthState>) -> HttpResponse {
    HealthState::probe_response(state.is_alive())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Error;
    use actix_web::{App, http::StatusCode, test as actix_test};
    use async_trait::async_trait;
    use rstest::rstest;

    struct DownStore;

    #[async_trait]
    impl ReadinessProbe for DownStore {
        async fn check(&self) -> Result<(), Error> {
            Err(Error::service_unavailable("no servers available"))
        }
    }

    async fn probe(state: HealthState, uri: &str) -> StatusCode {
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(ready)
                .service(live),
        )
        .await;
        let request = actix_test::TestRequest::get().uri(uri).to_request();
        actix_test::call_service(&app, request).await.status()
    }

    #[rstest]
    #[actix_web::test]
    async fn not_ready_until_marked() {
        assert_eq!(
            probe(HealthState::default(), "/health/ready").await,
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[rstest]
    #[actix_web::test]
    async fn ready_when_marked_and_store_answers() {
        let state = HealthState::default();
        state.mark_ready();
        assert_eq!(probe(state, "/health/ready").await, StatusCode::OK);
    }

    #[rstest]
    #[actix_web::test]
    async fn unreachable_store_fails_readiness_only() {
        let state = HealthState::new(Arc::new(DownStore));
        state.mark_ready();
        assert_eq!(
            probe(state, "/health/ready").await,
            StatusCode::SERVICE_UNAVAILABLE
        );

        let state = HealthState::new(Arc::new(DownStore));
        assert_eq!(probe(state, "/health/live").await, StatusCode::OK);
    }

    #[rstest]
    #[actix_web::test]
    async fn draining_fails_liveness() {
        let state = HealthState::default();
        state.mark_unhealthy();
        assert_eq!(
            probe(state, "/health/live").await,
            StatusCode::SERVICE_UNAVAILABLE
        );
    }
}
