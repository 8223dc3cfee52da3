//! Request tracing middleware.
//!
//! Each request runs inside a fresh [`TraceId`] scope, so domain errors and
//! log events created while handling it carry the same identifier. The
//! identifier is echoed in the `trace-id` response header and a completion
//! event records method, path, status and latency.

use std::task::{Context, Poll};
use std::time::Instant;

use actix_web::Error;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::{HeaderName, HeaderValue};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use tracing::{error, info};

use crate::domain::{TRACE_ID_HEADER, TraceId};

/// Middleware attaching a request-scoped trace identifier.
///
/// Handlers can read the identifier via [`TraceId::current`].
///
/// # Examples
/// ```
/// use actix_web::App;
/// use warehouse::Trace;
///
/// let _app = App::new().wrap(Trace);
/// ```
#[derive(Clone)]
pub struct Trace;

impl<S, B> Transform<S, ServiceRequest> for Trace
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = TraceMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(TraceMiddleware { service }))
    }
}

/// Service wrapper produced by [`Trace`]; not used directly.
pub struct TraceMiddleware<S> {
    service: S,
}

fn attach_header<B>(res: &mut ServiceResponse<B>, trace_id: TraceId) {
    match HeaderValue::from_str(&trace_id.to_string()) {
        Ok(value) => {
            res.response_mut()
                .headers_mut()
                .insert(HeaderName::from_static(TRACE_ID_HEADER), value);
        }
        Err(error) => {
            error!(%error, %trace_id, "failed to encode trace identifier header");
        }
    }
}

impl<S, B> Service<ServiceRequest> for TraceMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let trace_id = TraceId::generate();
        let method = req.method().clone();
        let path = req.path().to_owned();
        let started = Instant::now();
        let fut = self.service.call(req);
        Box::pin(async move {
            let mut res = TraceId::scope(trace_id, fut).await?;
            attach_header(&mut res, trace_id);
            info!(
                %trace_id,
                %method,
                path,
                status = res.status().as_u16(),
                latency_ms = started.elapsed().as_millis(),
                "request completed"
            );
            Ok(res)
        })
    }
}
