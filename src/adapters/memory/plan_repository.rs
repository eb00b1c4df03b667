//! In-memory plan storage.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::DomainError;
use crate::domain::plan::{Plan, PlanCatalog};
use crate::ports::PlanRepository;

#[derive(Debug, Clone, Default)]
pub struct InMemoryPlanRepository {
    plans: Arc<RwLock<Vec<Plan>>>,
}

impl InMemoryPlanRepository {
    /// Empty storage.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_plans(plans: Vec<Plan>) -> Self {
        Self {
            plans: Arc::new(RwLock::new(plans)),
        }
    }
}

#[async_trait]
impl PlanRepository for InMemoryPlanRepository {
    async fn list(&self) -> Result<Vec<Plan>, DomainError> {
        let plans = self.plans.read().await.clone();
        Ok(PlanCatalog::new(plans).into_plans())
    }

    async fn seed_if_empty(&self, plans: &[Plan]) -> Result<usize, DomainError> {
        let mut stored = self.plans.write().await;
        if !stored.is_empty() {
            return Ok(0);
        }
        stored.extend_from_slice(plans);
        Ok(plans.len())
    }
}
