use crate::{ConfigError, ConfigErrorResult};

use std::time::Duration;

use serde::Deserialize;

pub const DEFAULT_TELEGRAM_API_BASE: &str = "https://api.telegram.org";
pub const DEFAULT_NOTIFY_TIMEOUT_SECS: u64 = 10;
pub const MIN_NOTIFY_TIMEOUT_SECS: u64 = 1;
pub const MAX_NOTIFY_TIMEOUT_SECS: u64 = 60;

/// Telegram operator notifications. Disabled by default.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NotifierConfig {
    pub enabled: bool,
    pub api_base: String,
    /// Bot token (never logged)
    pub bot_token: Option<String>,
    pub chat_id: Option<i64>,
    pub timeout_secs: u64,
}

impl Default for NotifierConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            api_base: String::from(DEFAULT_TELEGRAM_API_BASE),
            bot_token: None,
            chat_id: None,
            timeout_secs: DEFAULT_NOTIFY_TIMEOUT_SECS,
        }
    }
}

impl NotifierConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !self.enabled {
            return Ok(());
        }

        if self.bot_token.as_deref().is_none_or(str::is_empty) {
            return Err(ConfigError::notifier(
                "notifier.bot_token is required when notifier.enabled is true",
            ));
        }

        if self.chat_id.is_none() {
            return Err(ConfigError::notifier(
                "notifier.chat_id is required when notifier.enabled is true",
            ));
        }

        if self.timeout_secs < MIN_NOTIFY_TIMEOUT_SECS || self.timeout_secs > MAX_NOTIFY_TIMEOUT_SECS
        {
            return Err(ConfigError::notifier(format!(
                "notifier.timeout_secs must be {}-{}, got {}",
                MIN_NOTIFY_TIMEOUT_SECS, MAX_NOTIFY_TIMEOUT_SECS, self.timeout_secs
            )));
        }

        Ok(())
    }
}
