//! CalculatorRepository port - Persistence of calculator records.

use async_trait::async_trait;

use crate::domain::calculator::Calculator;
use crate::domain::foundation::{CalculatorId, DomainError, UserId};

/// Result of [`CalculatorRepository::save_within_limit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitedInsert {
    Inserted,
    /// The owner already had `current` calculators; nothing was written.
    Refused { current: u32 },
}

/// Storage for calculators.
///
/// Listings are ordered newest first.
#[async_trait]
pub trait CalculatorRepository: Send + Sync {
    /// Inserts a new calculator in a single write.
    async fn save(&self, calculator: &Calculator) -> Result<(), DomainError>;

    /// Inserts only while the owner holds fewer than `limit` calculators.
    ///
    /// The count and the insert are one atomic step: concurrent callers for
    /// the same owner can never push the total past `limit`.
    async fn save_within_limit(
        &self,
        calculator: &Calculator,
        limit: u32,
    ) -> Result<LimitedInsert, DomainError>;

    async fn find_by_id(&self, id: &CalculatorId) -> Result<Option<Calculator>, DomainError>;

    /// Looks up the calculator behind a public link.
    async fn find_by_public_link(
        &self,
        owner_id: &UserId,
        token: &str,
    ) -> Result<Option<Calculator>, DomainError>;

    async fn list_all(&self) -> Result<Vec<Calculator>, DomainError>;

    async fn list_by_owner(&self, owner_id: &UserId) -> Result<Vec<Calculator>, DomainError>;

    async fn count_by_owner(&self, owner_id: &UserId) -> Result<u32, DomainError>;

    /// Deletes by id, restricted to `owner_id` when given.
    ///
    /// Returns whether a row was removed.
    async fn delete(
        &self,
        id: &CalculatorId,
        owner_id: Option<&UserId>,
    ) -> Result<bool, DomainError>;
}
