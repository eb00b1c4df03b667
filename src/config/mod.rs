//! Typed settings read from the process environment.
//!
//! Every key lives under `SAAS_CALC__`, with `__` between nesting levels,
//! so `SAAS_CALC__GEO__TIMEOUT_SECS=3` sets `geo.timeout_secs`. A `.env`
//! file in the working directory is merged in first when present.
//!
//! ```no_run
//! use saas_calc::config::AppConfig;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::load()?;
//! config.validate()?;
//! println!("binding {}", config.server.socket_addr()?);
//! # Ok(())
//! # }
//! ```

mod auth;
mod database;
mod error;
mod features;
mod geo;
mod notification;
mod server;

pub use auth::AuthConfig;
pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use features::FeatureFlags;
pub use geo::GeoConfig;
pub use notification::NotificationConfig;
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

const ENV_PREFIX: &str = "SAAS_CALC";

/// All sections. Only `database.url` and `auth.jwt_secret` have no default.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    pub database: DatabaseConfig,

    pub auth: AuthConfig,

    /// Geocoder and router endpoints
    #[serde(default)]
    pub geo: GeoConfig,

    /// Bot API delivery of computation summaries
    #[serde(default)]
    pub notification: NotificationConfig,

    #[serde(default)]
    pub features: FeatureFlags,
}

impl AppConfig {
    /// Reads `.env` (if any) and the `SAAS_CALC__*` variables.
    ///
    /// Fails when a required key is absent or a value does not parse.
    /// Semantic checks are left to [`AppConfig::validate`].
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let source = config::Environment::default()
            .prefix(ENV_PREFIX)
            .separator("__");

        Ok(config::Config::builder()
            .add_source(source)
            .build()?
            .try_deserialize()?)
    }

    /// Checks each section; the first failure wins.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.database.validate()?;
        self.auth.validate(&self.server.environment)?;
        self.geo.validate()?;
        self.notification
            .validate(self.features.enable_notifications)
    }

    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
