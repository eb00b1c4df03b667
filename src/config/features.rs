//! Runtime switches

use serde::Deserialize;

/// All off by default.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct FeatureFlags {
    /// Deliver computation summaries to the owner's bot chat
    #[serde(default)]
    pub enable_notifications: bool,

    /// JSON log lines instead of the human-readable format
    #[serde(default)]
    pub json_logs: bool,

    /// Include storage error causes in 500 bodies; keep off in production
    #[serde(default)]
    pub verbose_errors: bool,
}
