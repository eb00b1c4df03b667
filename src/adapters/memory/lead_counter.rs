//! In-memory lead totals.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, UserId};
use crate::ports::LeadCounter;

#[derive(Debug, Clone, Default)]
pub struct InMemoryLeadCounter {
    counts: Arc<RwLock<HashMap<UserId, u64>>>,
}

impl InMemoryLeadCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set(&self, owner_id: UserId, leads: u64) {
        self.counts.write().await.insert(owner_id, leads);
    }
}

#[async_trait]
impl LeadCounter for InMemoryLeadCounter {
    async fn count_by_owner(&self, owner_id: &UserId) -> Result<u64, DomainError> {
        Ok(self.counts.read().await.get(owner_id).copied().unwrap_or(0))
    }
}
