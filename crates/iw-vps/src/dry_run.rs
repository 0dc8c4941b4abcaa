use async_trait::async_trait;
use iw_core::{ActionError, PowerController};
use log::warn;

/// Stand-in controller for `vps.dry_run`: logs the decision, touches nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct DryRunPowerController;

#[async_trait]
impl PowerController for DryRunPowerController {
    async fn power_off(&self) -> Result<(), ActionError> {
        warn!("Dry run: VPS power-off skipped");
        Ok(())
    }
}
