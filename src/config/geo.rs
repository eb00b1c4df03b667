//! Geocoding and routing service configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Upper bound for a single outbound geo call
const MAX_TIMEOUT_SECS: u64 = 30;

/// Endpoints of the Nominatim-compatible geocoder and OSRM-compatible router
#[derive(Debug, Clone, Deserialize)]
pub struct GeoConfig {
    #[serde(default = "default_geocoder_base_url")]
    pub geocoder_base_url: String,

    #[serde(default = "default_router_base_url")]
    pub router_base_url: String,

    /// Per-call timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Sent as `User-Agent`; public Nominatim rejects anonymous clients
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl GeoConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if !is_http_url(&self.geocoder_base_url) {
            return Err(ValidationError::InvalidServiceUrl("geocoder"));
        }
        if !is_http_url(&self.router_base_url) {
            return Err(ValidationError::InvalidServiceUrl("router"));
        }
        if self.timeout_secs == 0 || self.timeout_secs > MAX_TIMEOUT_SECS {
            return Err(ValidationError::InvalidExternalTimeout);
        }
        if self.user_agent.trim().is_empty() {
            return Err(ValidationError::MissingRequired("GEO__USER_AGENT"));
        }
        Ok(())
    }
}

impl Default for GeoConfig {
    fn default() -> Self {
        Self {
            geocoder_base_url: default_geocoder_base_url(),
            router_base_url: default_router_base_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

pub(super) fn is_http_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

fn default_geocoder_base_url() -> String {
    "https://nominatim.openstreetmap.org".to_string()
}

fn default_router_base_url() -> String {
    "https://router.project-osrm.org".to_string()
}

fn default_timeout_secs() -> u64 {
    5
}

fn default_user_agent() -> String {
    concat!("saas-calc/", env!("CARGO_PKG_VERSION")).to_string()
}
