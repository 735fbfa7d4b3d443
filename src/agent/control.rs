//! Host control signals produced by the agent.

use async_trait::async_trait;

use crate::Result;

/// Control-claim signals toward the hosting environment.
///
/// The agent emits both signals on a best-effort basis: a failing
/// implementation is logged and never fails the lifecycle operation that
/// produced the signal.
#[async_trait]
pub trait HostControl: Send + Sync {
    /// Take over from a previous agent generation without waiting for all
    /// open application instances to close. Emitted after preload settles.
    async fn skip_waiting(&self) -> Result<()>;

    /// Take control of already-open application instances without
    /// requiring a reload. Emitted during activation, regardless of
    /// whether generation cleanup succeeded.
    async fn claim_clients(&self) -> Result<()>;
}

/// Default [`HostControl`] that acknowledges every signal.
///
/// Suitable for hosts with no previous-generation handover semantics.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopControl;

#[async_trait]
impl HostControl for NoopControl {
    async fn skip_waiting(&self) -> Result<()> {
        Ok(())
    }

    async fn claim_clients(&self) -> Result<()> {
        Ok(())
    }
}
