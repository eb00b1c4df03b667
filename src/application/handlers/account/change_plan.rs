//! ChangePlanHandler - Switches the tenant to another catalog plan.

use std::sync::Arc;

use crate::domain::foundation::{AuthenticatedUser, PlanId};
use crate::domain::plan::PlanCatalog;
use crate::ports::TenantDirectory;

use super::{AccountError, AccountOverview, GetOverviewHandler, ListPlansHandler};

#[derive(Debug, Clone)]
pub struct ChangePlanCommand {
    pub user: AuthenticatedUser,
    pub plan_id: String,
}

/// No payment is involved: any known plan can be selected and becomes active.
pub struct ChangePlanHandler {
    tenants: Arc<dyn TenantDirectory>,
    plans: Arc<ListPlansHandler>,
    overview: Arc<GetOverviewHandler>,
}

impl ChangePlanHandler {
    pub fn new(
        tenants: Arc<dyn TenantDirectory>,
        plans: Arc<ListPlansHandler>,
        overview: Arc<GetOverviewHandler>,
    ) -> Self {
        Self {
            tenants,
            plans,
            overview,
        }
    }

    /// Returns the refreshed overview.
    pub async fn handle(&self, cmd: ChangePlanCommand) -> Result<AccountOverview, AccountError> {
        let plan_id = PlanId::new(cmd.plan_id.trim())?;

        let catalog = PlanCatalog::new(self.plans.handle().await);
        if catalog.find(&plan_id).is_none() {
            return Err(AccountError::UnknownPlan(plan_id));
        }

        if !self.tenants.set_plan(&cmd.user.id, &plan_id).await? {
            return Err(AccountError::TenantNotFound(cmd.user.id));
        }

        tracing::info!(user_id = %cmd.user.id, plan_id = %plan_id, "Plan changed");

        self.overview.handle(&cmd.user).await
    }
}
