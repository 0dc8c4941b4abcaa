use crate::{PowerState, VpsClient};

use async_trait::async_trait;
use iw_core::{ActionError, PowerController};
use log::info;

const POWER_OFF_ACTION: &str = "power_off";

/// Powers the game host off through the control plane. Skips the request
/// when the host already reports off, so repeated calls are harmless.
#[derive(Debug, Clone)]
pub struct VpsPowerController {
    client: VpsClient,
}

impl VpsPowerController {
    pub fn new(client: VpsClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PowerController for VpsPowerController {
    async fn power_off(&self) -> Result<(), ActionError> {
        let state = self
            .client
            .power_state()
            .await
            .map_err(|e| ActionError::from_error(POWER_OFF_ACTION, e))?;

        if state == PowerState::Off {
            info!("VPS already powered off");
            return Ok(());
        }

        let action = self
            .client
            .power_off()
            .await
            .map_err(|e| ActionError::from_error(POWER_OFF_ACTION, e))?;
        info!("VPS power-off requested, state: {action}");
        Ok(())
    }
}
