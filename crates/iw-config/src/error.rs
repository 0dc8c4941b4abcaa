use std::panic::Location;
use std::path::PathBuf;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum ConfigError {
    #[error("{section} config error: {message} {location}")]
    Invalid {
        section: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error in {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[track_caller]
    fn invalid<S: Into<String>>(section: &'static str, message: S) -> Self {
        ConfigError::Invalid {
            section,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create a general config error
    #[track_caller]
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::invalid("General", message)
    }

    /// Create a watchdog section error
    #[track_caller]
    pub fn watchdog<S: Into<String>>(message: S) -> Self {
        Self::invalid("Watchdog", message)
    }

    /// Create a probe section error
    #[track_caller]
    pub fn probe<S: Into<String>>(message: S) -> Self {
        Self::invalid("Probe", message)
    }

    /// Create a VPS section error
    #[track_caller]
    pub fn vps<S: Into<String>>(message: S) -> Self {
        Self::invalid("Vps", message)
    }

    /// Create a notifier section error
    #[track_caller]
    pub fn notifier<S: Into<String>>(message: S) -> Self {
        Self::invalid("Notifier", message)
    }
}

pub type ConfigErrorResult<T> = StdResult<T, ConfigError>;
