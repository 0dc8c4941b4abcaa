use std::fmt;

use serde_json::Value;

const UNKNOWN_ACTION_STATE: &str = "Unknown";

/// Power state of the VPS as reported by `IsPowerOn`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerState {
    On,
    Off,
    /// Field missing or not a boolean
    Unknown,
}

impl PowerState {
    pub(crate) fn from_server(body: &Value) -> Self {
        match body.get("IsPowerOn").and_then(Value::as_bool) {
            Some(true) => PowerState::On,
            Some(false) => PowerState::Off,
            None => PowerState::Unknown,
        }
    }
}

impl fmt::Display for PowerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PowerState::On => write!(f, "on"),
            PowerState::Off => write!(f, "off"),
            PowerState::Unknown => write!(f, "unknown"),
        }
    }
}

/// State of a submitted power action, e.g. `InProgress`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionState(String);

impl ActionState {
    pub(crate) fn from_action(body: &Value) -> Self {
        let state = body
            .get("State")
            .and_then(Value::as_str)
            .unwrap_or(UNKNOWN_ACTION_STATE);
        ActionState(state.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ActionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
