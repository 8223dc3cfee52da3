//! Request-scoped trace identifier.
//!
//! The identifier lives in Tokio task-local storage so errors and log events
//! can pick it up without threading it through every call. Task-locals are not
//! inherited by spawned tasks; wrap spawned work in [`TraceId::scope`].

use std::future::Future;

use tokio::task_local;
use uuid::Uuid;

task_local! {
    static TRACE_ID: TraceId;
}

/// Correlation identifier attached to a single request.
///
/// # Examples
/// ```
/// use warehouse::TraceId;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let trace_id: TraceId = "00000000-0000-0000-0000-000000000000"
///     .parse()
///     .expect("valid UUID");
/// let observed = TraceId::scope(trace_id, async move { TraceId::current() }).await;
/// assert_eq!(observed, Some(trace_id));
/// # });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceId(Uuid);

impl TraceId {
    /// Generate a new random trace identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Construct a trace identifier from an existing UUID.
    #[must_use]
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// The identifier in scope for the current task, if any.
    #[must_use]
    pub fn current() -> Option<Self> {
        TRACE_ID.try_with(|id| *id).ok()
    }

    /// Run `fut` with `trace_id` in scope.
    pub async fn scope<Fut>(trace_id: Self, fut: Fut) -> Fut::Output
    where
        Fut: Future,
    {
        TRACE_ID.scope(trace_id, fut).await
    }
}

impl std::fmt::Display for TraceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for TraceId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}
