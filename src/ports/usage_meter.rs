//! UsageMeter port - Computation counters.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};

/// Per-calculator computation counter.
///
/// # Contract
///
/// - `record_computation` is an atomic increment at the storage layer;
///   concurrent calls on one calculator never lose updates.
/// - Empty or unknown ids are a silent no-op.
#[async_trait]
pub trait UsageMeter: Send + Sync {
    async fn record_computation(&self, calculator_id: &str) -> Result<(), DomainError>;

    /// Sum of computation counts across a tenant's calculators.
    async fn calcs_used(&self, owner_id: &UserId) -> Result<u64, DomainError>;
}
