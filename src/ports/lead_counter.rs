//! LeadCounter port - Lead totals per tenant.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};

/// Count of leads collected for a tenant. Lead capture itself lives
/// elsewhere; this port only reads the total.
#[async_trait]
pub trait LeadCounter: Send + Sync {
    async fn count_by_owner(&self, owner_id: &UserId) -> Result<u64, DomainError>;
}
