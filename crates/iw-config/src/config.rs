use crate::{
    CONFIG_DIR_ENV, CONFIG_DIR_NAME, CONFIG_FILE_NAME, ConfigError, ConfigErrorResult,
    LoggingConfig, NotifierConfig, ProbeConfig, VpsConfig, WatchdogConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub watchdog: WatchdogConfig,
    pub probe: ProbeConfig,
    pub vps: VpsConfig,
    pub notifier: NotifierConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for IW_CONFIG_DIR env var, else use ./.iw/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply IW_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;
        Self::load_from(&config_dir)
    }

    /// Same as [`Config::load`] with an explicit config directory.
    pub fn load_from(config_dir: &Path) -> ConfigErrorResult<Self> {
        if !config_dir.exists() {
            std::fs::create_dir_all(config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.to_path_buf(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: IW_CONFIG_DIR env var > ./.iw/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(CONFIG_DIR_NAME))
    }

    /// Validate all sections. Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.watchdog.validate()?;
        self.probe.validate()?;
        self.vps.validate()?;
        self.notifier.validate()?;

        Ok(())
    }

    /// Absolute path of the log file, when file logging is configured.
    pub fn log_file_path(&self, config_dir: &Path) -> Option<PathBuf> {
        self.logging
            .file
            .as_ref()
            .map(|filename| config_dir.join(&self.logging.dir).join(filename))
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  watchdog: poll={}s, idle_shutdown={}s, crash_after={}, on_shutdown_failure={}",
            self.watchdog.poll_interval_secs,
            self.watchdog.idle_shutdown_secs,
            self.watchdog.crash_after_failures,
            self.watchdog.shutdown_failure_policy
        );
        info!(
            "  probe: {} (connect={}ms, lookup={}ms, status={}ms)",
            self.probe.address(),
            self.probe.connect_timeout_ms,
            self.probe.lookup_timeout_ms,
            self.probe.status_timeout_ms
        );
        info!(
            "  vps: {} (token: {}, dry_run: {})",
            self.vps.api_url.as_deref().unwrap_or("<unset>"),
            if self.vps.api_token.is_some() {
                "set"
            } else {
                "unset"
            },
            self.vps.dry_run
        );
        info!(
            "  notifier: {}",
            if self.notifier.enabled {
                "telegram"
            } else {
                "disabled"
            }
        );
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        // Watchdog
        Self::apply_env_parse(
            "IW_POLL_INTERVAL_SECS",
            &mut self.watchdog.poll_interval_secs,
        );
        Self::apply_env_parse(
            "IW_IDLE_SHUTDOWN_SECS",
            &mut self.watchdog.idle_shutdown_secs,
        );
        Self::apply_env_parse(
            "IW_CRASH_AFTER_FAILURES",
            &mut self.watchdog.crash_after_failures,
        );
        Self::apply_env_parse(
            "IW_SHUTDOWN_FAILURE_POLICY",
            &mut self.watchdog.shutdown_failure_policy,
        );

        // Probe
        Self::apply_env_string("IW_SERVER_HOST", &mut self.probe.host);
        Self::apply_env_parse("IW_SERVER_PORT", &mut self.probe.port);
        Self::apply_env_parse(
            "IW_PROBE_PROTOCOL_VERSION",
            &mut self.probe.protocol_version,
        );
        Self::apply_env_parse(
            "IW_PROBE_CONNECT_TIMEOUT_MS",
            &mut self.probe.connect_timeout_ms,
        );
        Self::apply_env_parse(
            "IW_PROBE_LOOKUP_TIMEOUT_MS",
            &mut self.probe.lookup_timeout_ms,
        );
        Self::apply_env_parse(
            "IW_PROBE_STATUS_TIMEOUT_MS",
            &mut self.probe.status_timeout_ms,
        );

        // VPS
        Self::apply_env_option_string("IW_VPS_API_URL", &mut self.vps.api_url);
        Self::apply_env_option_string("IW_VPS_API_TOKEN", &mut self.vps.api_token);
        Self::apply_env_parse(
            "IW_VPS_REQUEST_TIMEOUT_SECS",
            &mut self.vps.request_timeout_secs,
        );
        Self::apply_env_bool("IW_VPS_DRY_RUN", &mut self.vps.dry_run);

        // Notifier
        Self::apply_env_bool("IW_NOTIFIER_ENABLED", &mut self.notifier.enabled);
        Self::apply_env_string("IW_TELEGRAM_API_BASE", &mut self.notifier.api_base);
        Self::apply_env_option_string("IW_TELEGRAM_TOKEN", &mut self.notifier.bot_token);
        Self::apply_env_option_parse("IW_TELEGRAM_CHAT_ID", &mut self.notifier.chat_id);

        // Logging
        Self::apply_env_parse("IW_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("IW_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("IW_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }

    /// Helper: Apply environment variable override for optional parseable values
    fn apply_env_option_parse<T: std::str::FromStr>(var_name: &str, target: &mut Option<T>) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = Some(parsed);
        }
    }
}
