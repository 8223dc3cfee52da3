//! Driving port used by readiness checks.

use async_trait::async_trait;

use crate::domain::Error;

/// Confirms that a backing dependency is able to serve requests.
#[async_trait]
pub trait ReadinessProbe: Send + Sync {
    async fn check(&self) -> Result<(), Error>;
}

/// Probe that always reports ready.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureReadinessProbe;

#[async_trait]
impl ReadinessProbe for FixtureReadinessProbe {
    async fn check(&self) -> Result<(), Error> {
        Ok(())
    }
}
