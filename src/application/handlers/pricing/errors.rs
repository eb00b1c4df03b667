//! Errors from pricing handlers.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::pricing::PricingError;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ComputeError {
    /// The request itself cannot be priced.
    #[error(transparent)]
    Pricing(#[from] PricingError),

    /// The tariff could not be loaded.
    #[error("{0}")]
    Infrastructure(String),
}

impl ComputeError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ComputeError::Pricing(err) => err.code(),
            ComputeError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
}

impl From<DomainError> for ComputeError {
    fn from(err: DomainError) -> Self {
        ComputeError::Infrastructure(err.to_string())
    }
}
