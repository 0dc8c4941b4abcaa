use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DaemonError {
    #[error("Config error: {0}")]
    Config(#[from] iw_config::ConfigError),

    #[error("Watchdog error: {0}")]
    Watchdog(#[from] iw_core::WatchdogError),

    #[error("Probe error: {0}")]
    Probe(#[from] iw_core::ProbeError),

    #[error("VPS error: {0}")]
    Vps(#[from] iw_vps::VpsError),

    #[error("Notifier error: {0}")]
    Notify(#[from] iw_notify::NotifyError),

    #[error("Failed to prepare log file {path}: {source} {location}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Failed to initialize logger: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },
}

impl DaemonError {
    #[track_caller]
    pub fn log_file(path: PathBuf, source: std::io::Error) -> Self {
        DaemonError::LogFile {
            path,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn logger<S: Into<String>>(message: S) -> Self {
        DaemonError::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, DaemonError>;
