//! Configuration failures

use thiserror::Error;

/// Raised by [`super::AppConfig::load`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),
}

/// Raised by the per-section `validate` methods
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Names the env key below the `SAAS_CALC__` prefix
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Port must be non-zero")]
    InvalidPort,

    #[error("Cannot bind to {0}")]
    InvalidSocketAddr(String),

    #[error("Request timeout must be between 1 and 300 seconds")]
    InvalidTimeout,

    #[error("Database URL must use the postgres:// or postgresql:// scheme")]
    InvalidDatabaseUrl,

    #[error("Pool min_connections exceeds max_connections")]
    InvalidPoolSize,

    #[error("Pool size exceeds maximum allowed (100)")]
    PoolSizeTooLarge,

    #[error("JWT secret must be at least 32 characters outside development")]
    JwtSecretTooShort,

    #[error("{0} base URL must be an http(s) URL")]
    InvalidServiceUrl(&'static str),

    #[error("External call timeout must be between 1 and 30 seconds")]
    InvalidExternalTimeout,

    #[error("Notification queue capacity and concurrency must be positive")]
    InvalidNotificationLimits,
}
