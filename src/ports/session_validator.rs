//! Bearer token validation.

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser};

/// Resolves a bearer token to the tenant (or administrator) behind it.
///
/// `InvalidToken` and `TokenExpired` end in a 401. `ServiceUnavailable`
/// is for failures of the validator itself and ends in a 503.
#[async_trait]
pub trait SessionValidator: Send + Sync {
    /// `token` is the raw value after the `Bearer` scheme.
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError>;
}
