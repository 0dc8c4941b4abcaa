//! Builds the engine and its collaborators from configuration.

use crate::DaemonResult;

use std::sync::Arc;

use iw_config::{Config, NotifierConfig, VpsConfig};
use iw_core::{Notifier, PowerController, WatchdogEngine, WatchdogSettings};
use iw_notify::TelegramNotifier;
use iw_probe::MinecraftProbe;
use iw_vps::{DryRunPowerController, VpsClient, VpsPowerController};
use log::{info, warn};

pub fn build_engine(config: &Config) -> DaemonResult<WatchdogEngine> {
    let probe = Arc::new(MinecraftProbe::new(&config.probe));
    let power = build_power_controller(&config.vps)?;
    let engine = WatchdogEngine::new(WatchdogSettings::from(&config.watchdog), probe, power);

    Ok(match build_notifier(&config.notifier)? {
        Some(notifier) => engine.with_notifier(notifier),
        None => engine,
    })
}

pub fn build_power_controller(config: &VpsConfig) -> DaemonResult<Arc<dyn PowerController>> {
    if config.dry_run {
        warn!("vps.dry_run is set: the host will NOT be powered off");
        return Ok(Arc::new(DryRunPowerController));
    }

    let client = VpsClient::from_config(config)?;
    info!("Power-off via {}", client.api_url());
    Ok(Arc::new(VpsPowerController::new(client)))
}

/// `None` when notifications are disabled; notices are then only logged.
pub fn build_notifier(config: &NotifierConfig) -> DaemonResult<Option<Arc<dyn Notifier>>> {
    if !config.enabled {
        return Ok(None);
    }

    let notifier = TelegramNotifier::from_config(config)?;
    Ok(Some(Arc::new(notifier)))
}
