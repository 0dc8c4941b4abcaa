use crate::{ConfigError, ConfigErrorResult};

use std::time::Duration;

use serde::Deserialize;

pub const MIN_REQUEST_TIMEOUT_SECS: u64 = 1;
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// VPS control-plane endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct VpsConfig {
    /// Server resource URL; power actions are posted to `{api_url}/Action`
    pub api_url: Option<String>,
    /// Bearer token (never logged)
    pub api_token: Option<String>,
    pub request_timeout_secs: u64,
    /// Log power-off decisions instead of calling the control plane
    pub dry_run: bool,
}

impl Default for VpsConfig {
    fn default() -> Self {
        Self {
            api_url: None,
            api_token: None,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            dry_run: false,
        }
    }
}

impl VpsConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.request_timeout_secs < MIN_REQUEST_TIMEOUT_SECS
            || self.request_timeout_secs > MAX_REQUEST_TIMEOUT_SECS
        {
            return Err(ConfigError::vps(format!(
                "vps.request_timeout_secs must be {}-{}, got {}",
                MIN_REQUEST_TIMEOUT_SECS, MAX_REQUEST_TIMEOUT_SECS, self.request_timeout_secs
            )));
        }

        if self.dry_run {
            return Ok(());
        }

        match self.api_url.as_deref() {
            None | Some("") => {
                return Err(ConfigError::vps(
                    "vps.api_url is required unless vps.dry_run is enabled",
                ));
            }
            Some(url) if !(url.starts_with("http://") || url.starts_with("https://")) => {
                return Err(ConfigError::vps(format!(
                    "vps.api_url must start with http:// or https://, got '{url}'"
                )));
            }
            Some(_) => {}
        }

        if self.api_token.as_deref().is_none_or(str::is_empty) {
            return Err(ConfigError::vps(
                "vps.api_token is required unless vps.dry_run is enabled",
            ));
        }

        Ok(())
    }
}
