use crate::error::ScriptError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_FILE_EXTENSION: &str = ".txt";
pub const DEFAULT_STARTUP_DELAY_MS: u64 = 1000;

/// Settings the extension keeps in synced storage.
///
/// Every field is optional in the stored JSON; missing ones take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecorderConfig {
    /// When set, the script builder is not injected into pages.
    pub paused: bool,
    pub file_extension: String,
    /// Delay before the builder starts, giving the page time to settle.
    pub startup_delay_ms: u64,
}

impl Default for RecorderConfig {
    fn default() -> Self {
        Self {
            paused: false,
            file_extension: DEFAULT_FILE_EXTENSION.to_string(),
            startup_delay_ms: DEFAULT_STARTUP_DELAY_MS,
        }
    }
}

impl RecorderConfig {
    pub fn from_json(json: &str) -> Result<Self, ScriptError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, ScriptError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Flips the paused flag and returns the new value.
    pub fn toggle_paused(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }

    pub fn should_start(&self) -> bool {
        !self.paused
    }

    pub fn startup_delay(&self) -> Duration {
        Duration::from_millis(self.startup_delay_ms)
    }
}
