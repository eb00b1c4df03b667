//! ListPlansHandler - The plan catalog.

use std::sync::Arc;

use crate::domain::plan::{Plan, PlanCatalog};
use crate::ports::PlanRepository;

pub struct ListPlansHandler {
    plans: Arc<dyn PlanRepository>,
}

impl ListPlansHandler {
    pub fn new(plans: Arc<dyn PlanRepository>) -> Self {
        Self { plans }
    }

    /// Never fails: an empty or unreadable catalog yields the built-in plans.
    pub async fn handle(&self) -> Vec<Plan> {
        match self.plans.list().await {
            Ok(plans) => PlanCatalog::or_defaults(plans).into_plans(),
            Err(e) => {
                tracing::warn!(error = %e, "Plan catalog unavailable, serving defaults");
                PlanCatalog::with_defaults().into_plans()
            }
        }
    }
}
