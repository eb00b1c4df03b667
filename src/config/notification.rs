//! Computation notification configuration

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use super::geo::is_http_url;

/// Bot API delivery settings and queue bounds
#[derive(Debug, Clone, Deserialize)]
pub struct NotificationConfig {
    #[serde(default = "default_api_base_url")]
    pub telegram_api_base_url: String,

    /// Bot token; notifications are disabled when absent
    #[serde(default)]
    pub bot_token: Option<Secret<String>>,

    /// Pending notifications kept before new ones are dropped
    #[serde(default = "default_queue_capacity")]
    pub queue_capacity: usize,

    /// Deliveries allowed in flight at once
    #[serde(default = "default_max_concurrent")]
    pub max_concurrent: usize,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl NotificationConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Token if one is configured and non-blank
    pub fn bot_token(&self) -> Option<&str> {
        self.bot_token
            .as_ref()
            .map(|t| t.expose_secret().as_str())
            .filter(|t| !t.trim().is_empty())
    }

    pub fn validate(&self, enabled: bool) -> Result<(), ValidationError> {
        if self.queue_capacity == 0 || self.max_concurrent == 0 {
            return Err(ValidationError::InvalidNotificationLimits);
        }
        if self.timeout_secs == 0 || self.timeout_secs > 30 {
            return Err(ValidationError::InvalidExternalTimeout);
        }
        if !enabled {
            return Ok(());
        }
        if !is_http_url(&self.telegram_api_base_url) {
            return Err(ValidationError::InvalidServiceUrl("telegram"));
        }
        if self.bot_token().is_none() {
            return Err(ValidationError::MissingRequired("NOTIFICATION__BOT_TOKEN"));
        }
        Ok(())
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            telegram_api_base_url: default_api_base_url(),
            bot_token: None,
            queue_capacity: default_queue_capacity(),
            max_concurrent: default_max_concurrent(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_api_base_url() -> String {
    "https://api.telegram.org".to_string()
}

fn default_queue_capacity() -> usize {
    256
}

fn default_max_concurrent() -> usize {
    8
}

fn default_timeout_secs() -> u64 {
    5
}
