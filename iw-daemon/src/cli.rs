use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "iw-daemon")]
#[command(about = "Powers off the game server host once nobody has played for a while")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Config directory (overrides IW_CONFIG_DIR, default ./.iw)
    #[arg(long, global = true)]
    pub config_dir: Option<PathBuf>,
}

impl Cli {
    /// Subcommand to execute; `run` when none is given.
    pub fn command(&self) -> Command {
        self.command.unwrap_or(Command::Run)
    }
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Run the watchdog until Ctrl+C
    Run,

    /// Query the game server once and print who is online
    Probe,

    /// Print the VPS power state
    Status,

    /// Power the VPS on (no-op when it is already running)
    PowerOn,
}
