//! PlanRepository port - Plan catalog storage.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::plan::Plan;

#[async_trait]
pub trait PlanRepository: Send + Sync {
    /// All stored plans, ordered by price then id.
    async fn list(&self) -> Result<Vec<Plan>, DomainError>;

    /// Inserts `plans` only when storage holds none.
    ///
    /// Returns the number of plans inserted.
    async fn seed_if_empty(&self, plans: &[Plan]) -> Result<usize, DomainError>;
}
