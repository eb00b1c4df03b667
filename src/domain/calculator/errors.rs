//! Calculator management errors.

use crate::domain::foundation::{CalculatorId, DomainError, ErrorCode, ValidationError};
use crate::domain::usage::QuotaExceeded;

/// Errors from calculator and configuration management.
#[derive(Debug, Clone, PartialEq)]
pub enum CalculatorError {
    /// Input failed validation.
    Validation(ValidationError),
    /// Plan limit on calculators reached.
    QuotaExceeded { limit: u32, current: u32 },
    NotFound(CalculatorId),
    /// No calculator behind a public link.
    LinkNotFound,
    /// Caller may not act on this calculator, or it has the wrong type.
    Forbidden,
    /// Storage or other infrastructure failure.
    Infrastructure(String),
}

impl CalculatorError {
    pub fn not_found(id: CalculatorId) -> Self {
        CalculatorError::NotFound(id)
    }

    pub fn forbidden() -> Self {
        CalculatorError::Forbidden
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        CalculatorError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            CalculatorError::Validation(_) => ErrorCode::ValidationFailed,
            CalculatorError::QuotaExceeded { .. } => ErrorCode::QuotaExceeded,
            CalculatorError::NotFound(_) | CalculatorError::LinkNotFound => {
                ErrorCode::CalculatorNotFound
            }
            CalculatorError::Forbidden => ErrorCode::Forbidden,
            CalculatorError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            CalculatorError::Validation(err) => err.to_string(),
            CalculatorError::QuotaExceeded { limit, .. } => format!(
                "Calculator limit of your plan reached ({} allowed)",
                limit
            ),
            CalculatorError::NotFound(id) => format!("Calculator not found: {}", id),
            CalculatorError::LinkNotFound => "Calculator not found".to_string(),
            CalculatorError::Forbidden => "Permission denied".to_string(),
            CalculatorError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for CalculatorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for CalculatorError {}

impl From<ValidationError> for CalculatorError {
    fn from(err: ValidationError) -> Self {
        CalculatorError::Validation(err)
    }
}

impl From<QuotaExceeded> for CalculatorError {
    fn from(err: QuotaExceeded) -> Self {
        CalculatorError::QuotaExceeded {
            limit: err.limit,
            current: err.current,
        }
    }
}

impl From<DomainError> for CalculatorError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::Forbidden => CalculatorError::Forbidden,
            ErrorCode::ValidationFailed => CalculatorError::Validation(
                ValidationError::invalid_format(
                    err.details.get("field").cloned().unwrap_or_default(),
                    err.message,
                ),
            ),
            _ => CalculatorError::Infrastructure(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quota_message_names_the_limit() {
        let err = CalculatorError::QuotaExceeded {
            limit: 2,
            current: 2,
        };
        assert_eq!(err.code(), ErrorCode::QuotaExceeded);
        assert!(err.message().contains('2'));
    }

    #[test]
    fn database_errors_become_infrastructure() {
        let err: CalculatorError = DomainError::database("connection reset").into();
        assert!(matches!(err, CalculatorError::Infrastructure(_)));
        assert_eq!(err.code(), ErrorCode::DatabaseError);
    }

    #[test]
    fn forbidden_domain_error_maps_to_forbidden() {
        let err: CalculatorError = DomainError::new(ErrorCode::Forbidden, "nope").into();
        assert_eq!(err, CalculatorError::Forbidden);
    }
}
