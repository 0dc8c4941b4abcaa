use crate::{DaemonResult, wiring};

use iw_config::Config;
use iw_core::{StopSignal, WatchdogScheduler};
use iw_probe::MinecraftProbe;
use iw_vps::{PowerState, VpsClient};
use log::{error, info};

/// Run the watchdog until Ctrl+C. Returns an error when a tick fails.
pub async fn run(config: &Config) -> DaemonResult<()> {
    let engine = wiring::build_engine(config)?;
    let scheduler = WatchdogScheduler::new(engine, config.watchdog.poll_interval());

    let stop = StopSignal::new();
    let listener = stop.subscribe();

    let stop_for_signal = stop.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Received SIGINT (Ctrl+C), stopping watchdog");
                stop_for_signal.stop();
            }
            Err(e) => {
                error!("Failed to listen for Ctrl+C: {e}");
            }
        }
    });

    scheduler.run(listener).await?;
    Ok(())
}

pub async fn probe(config: &Config) -> DaemonResult<()> {
    let probe = MinecraftProbe::new(&config.probe);

    match probe.probe_details().await? {
        Some(status) => {
            let version = status
                .version
                .as_ref()
                .map(|v| v.name.as_str())
                .unwrap_or("unknown");
            println!(
                "{} is up ({}): {}/{} players online",
                probe.target(),
                version,
                status.players.online,
                status.players.max
            );
            for name in status.player_names() {
                println!("  {name}");
            }
        }
        None => println!("{} is unreachable", probe.target()),
    }

    Ok(())
}

pub async fn status(config: &Config) -> DaemonResult<()> {
    let client = VpsClient::from_config(&config.vps)?;
    let state = client.power_state().await?;
    println!("VPS power: {state}");
    Ok(())
}

pub async fn power_on(config: &Config) -> DaemonResult<()> {
    let client = VpsClient::from_config(&config.vps)?;

    if client.power_state().await? == PowerState::On {
        println!("VPS is already running");
        return Ok(());
    }

    let action = client.power_on().await?;
    println!("VPS power-on requested: {action}");
    Ok(())
}
