//! Collaborator contracts consumed by the engine.

use crate::{ActionError, ProbeError, ProbeResult};

use async_trait::async_trait;

/// Reports the player count of the monitored game server.
///
/// Implementations bound every network step with a timeout and fold all
/// network failures into [`ProbeResult::Unreachable`]. An `Err` means the
/// probe itself is broken and aborts the tick.
#[async_trait]
pub trait ServerProbe: Send + Sync {
    async fn probe(&self) -> Result<ProbeResult, ProbeError>;
}

/// Remote power-off of the game server host. Must be idempotent.
#[async_trait]
pub trait PowerController: Send + Sync {
    async fn power_off(&self) -> Result<(), ActionError>;
}

/// Best-effort text broadcast to operators.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, text: &str) -> Result<(), ActionError>;
}
