use crate::{ConfigError, ConfigErrorResult};

use std::time::Duration;

use serde::Deserialize;

pub const DEFAULT_PROBE_HOST: &str = "127.0.0.1";
pub const DEFAULT_PROBE_PORT: u16 = 25565;

/// Protocol number sent in the status handshake. Servers answer status
/// requests regardless of the number, it only affects the reported
/// compatibility flag.
pub const DEFAULT_PROTOCOL_VERSION: i32 = 767;

pub const MIN_TIMEOUT_MS: u64 = 100;
pub const MAX_TIMEOUT_MS: u64 = 30_000;
pub const DEFAULT_CONNECT_TIMEOUT_MS: u64 = 2_000;
pub const DEFAULT_LOOKUP_TIMEOUT_MS: u64 = 3_000;
pub const DEFAULT_STATUS_TIMEOUT_MS: u64 = 6_000;

/// Game server endpoint and probe timeouts.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProbeConfig {
    pub host: String,
    pub port: u16,
    pub protocol_version: i32,
    pub connect_timeout_ms: u64,
    pub lookup_timeout_ms: u64,
    pub status_timeout_ms: u64,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            host: String::from(DEFAULT_PROBE_HOST),
            port: DEFAULT_PROBE_PORT,
            protocol_version: DEFAULT_PROTOCOL_VERSION,
            connect_timeout_ms: DEFAULT_CONNECT_TIMEOUT_MS,
            lookup_timeout_ms: DEFAULT_LOOKUP_TIMEOUT_MS,
            status_timeout_ms: DEFAULT_STATUS_TIMEOUT_MS,
        }
    }
}

impl ProbeConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }

    pub fn lookup_timeout(&self) -> Duration {
        Duration::from_millis(self.lookup_timeout_ms)
    }

    pub fn status_timeout(&self) -> Duration {
        Duration::from_millis(self.status_timeout_ms)
    }

    /// Address in `host:port` form.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::probe("probe.host must not be empty"));
        }

        if self.port == 0 {
            return Err(ConfigError::probe("probe.port must not be 0"));
        }

        for (name, value) in [
            ("connect_timeout_ms", self.connect_timeout_ms),
            ("lookup_timeout_ms", self.lookup_timeout_ms),
            ("status_timeout_ms", self.status_timeout_ms),
        ] {
            if !(MIN_TIMEOUT_MS..=MAX_TIMEOUT_MS).contains(&value) {
                return Err(ConfigError::probe(format!(
                    "probe.{} must be {}-{}, got {}",
                    name, MIN_TIMEOUT_MS, MAX_TIMEOUT_MS, value
                )));
            }
        }

        Ok(())
    }
}
