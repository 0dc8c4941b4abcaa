//! iw-daemon - idle-shutdown watchdog for a game server host
//!
//! ```bash
//! # Run the watchdog (default command)
//! iw-daemon --config-dir /etc/iw
//!
//! # One-off diagnostics
//! iw-daemon probe
//! iw-daemon status
//! ```

use iw_config::Config;
use iw_daemon::{Cli, Command, DaemonResult, commands, logger};

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::info;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Environment from .env, if present, before IW_* overrides are read
    let _ = dotenvy::dotenv();

    match execute(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn execute(cli: &Cli) -> DaemonResult<()> {
    let config_dir = match cli.config_dir {
        Some(ref dir) => dir.clone(),
        None => Config::config_dir()?,
    };
    let config = Config::load_from(&config_dir)?;

    let command = cli.command();
    match command {
        Command::Run => {
            config.validate()?;
            init_logger(&config, config.log_file_path(&config_dir))?;
            info!("Starting iw-daemon v{}", env!("CARGO_PKG_VERSION"));
            config.log_summary();
            commands::run(&config).await
        }
        Command::Probe => {
            config.probe.validate()?;
            init_logger(&config, None)?;
            commands::probe(&config).await
        }
        Command::Status => {
            config.vps.validate()?;
            init_logger(&config, None)?;
            commands::status(&config).await
        }
        Command::PowerOn => {
            config.vps.validate()?;
            init_logger(&config, None)?;
            commands::power_on(&config).await
        }
    }
}

fn init_logger(config: &Config, log_file: Option<PathBuf>) -> DaemonResult<()> {
    logger::initialize(config.logging.level, log_file, config.logging.colored)
}
