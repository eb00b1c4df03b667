//! Account handler errors.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, PlanId, UserId, ValidationError};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AccountError {
    /// Token is valid but no account record backs it.
    #[error("Tenant not found: {0}")]
    TenantNotFound(UserId),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The requested plan is not in the catalog.
    #[error("Unknown plan: {0}")]
    UnknownPlan(PlanId),

    #[error("Error: {0}")]
    Infrastructure(String),
}

impl AccountError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AccountError::TenantNotFound(_) => ErrorCode::TenantNotFound,
            AccountError::Validation(_) => ErrorCode::ValidationFailed,
            AccountError::UnknownPlan(_) => ErrorCode::PlanNotFound,
            AccountError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
}

impl From<DomainError> for AccountError {
    fn from(err: DomainError) -> Self {
        AccountError::Infrastructure(err.to_string())
    }
}
