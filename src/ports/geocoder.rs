//! Geocoder port - Free-text address to coordinates.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::pricing::GeoPoint;

/// Failure talking to a geocoding or routing service.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeoError {
    #[error("request timed out")]
    Timeout,

    #[error("request failed: {0}")]
    Transport(String),

    #[error("unexpected status {0}")]
    Status(u16),

    #[error("malformed response: {0}")]
    Malformed(String),

    #[error("no results")]
    NoResults,

    #[error("service returned code '{0}'")]
    Code(String),

    #[error("no routes found")]
    NoRoutes,
}

#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Resolves the best match for `address`.
    async fn geocode(&self, address: &str) -> Result<GeoPoint, GeoError>;
}
