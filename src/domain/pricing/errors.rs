//! Pricing errors.

use thiserror::Error;

use crate::domain::foundation::{ErrorCode, ValidationError};

/// Why a price could not be computed.
///
/// Every variant is the caller's problem from the service's point of view,
/// so all of them surface as 4xx.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PricingError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Could not geocode '{address}': {reason}")]
    Geocode { address: String, reason: String },

    #[error("Could not build route: {0}")]
    Route(String),
}

impl PricingError {
    pub fn geocode(address: impl Into<String>, reason: impl Into<String>) -> Self {
        PricingError::Geocode {
            address: address.into(),
            reason: reason.into(),
        }
    }

    pub fn route(reason: impl Into<String>) -> Self {
        PricingError::Route(reason.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            PricingError::Validation(_) => ErrorCode::ValidationFailed,
            PricingError::Geocode { .. } => ErrorCode::GeocodeFailed,
            PricingError::Route(_) => ErrorCode::RouteFailed,
        }
    }
}
