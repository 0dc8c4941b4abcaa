mod config;
mod error;
mod log_level;
mod logging_config;
mod notifier_config;
mod probe_config;
mod shutdown_failure_policy;
mod vps_config;
mod watchdog_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use notifier_config::NotifierConfig;
pub use probe_config::ProbeConfig;
pub use shutdown_failure_policy::ShutdownFailurePolicy;
pub use vps_config::VpsConfig;
pub use watchdog_config::WatchdogConfig;

pub const CONFIG_DIR_ENV: &str = "IW_CONFIG_DIR";
pub const CONFIG_DIR_NAME: &str = ".iw";
pub const CONFIG_FILE_NAME: &str = "config.toml";

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;
