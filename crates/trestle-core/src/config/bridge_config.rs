use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;
use crate::models::NotificationAuthOptions;

/// Bridge configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    /// Name of the bidirectional channel, shared by both ends.
    pub channel_name: String,
    /// Delay before the tracking-consent prompt fires (milliseconds).
    pub tracking_request_delay_ms: u64,
    /// Options passed to the OS notification-authorization prompt.
    pub notification_options: NotificationAuthOptions,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            channel_name: defaults::DEFAULT_CHANNEL_NAME.to_string(),
            tracking_request_delay_ms: defaults::DEFAULT_TRACKING_REQUEST_DELAY_MS,
            notification_options: NotificationAuthOptions::default(),
        }
    }
}

impl BridgeConfig {
    /// Loads and validates configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks field-level invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.channel_name.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "channel_name",
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Tracking-prompt delay as a [`Duration`].
    pub fn tracking_request_delay(&self) -> Duration {
        Duration::from_millis(self.tracking_request_delay_ms)
    }
}
