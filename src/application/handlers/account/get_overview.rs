//! GetOverviewHandler - Account page data.

use std::sync::Arc;

use crate::domain::foundation::AuthenticatedUser;
use crate::domain::plan::{Plan, PlanCatalog};
use crate::domain::tenant::Tenant;
use crate::domain::usage::TenantUsage;
use crate::ports::TenantDirectory;

use super::{AccountError, ListPlansHandler, UsageReporter};

#[derive(Debug, Clone, PartialEq)]
pub struct AccountOverview {
    pub tenant: Tenant,
    /// Current plan; `None` without a plan or with a dangling reference.
    pub plan: Option<Plan>,
    pub plans: Vec<Plan>,
    pub usage: TenantUsage,
}

pub struct GetOverviewHandler {
    tenants: Arc<dyn TenantDirectory>,
    plans: Arc<ListPlansHandler>,
    usage: UsageReporter,
}

impl GetOverviewHandler {
    pub fn new(
        tenants: Arc<dyn TenantDirectory>,
        plans: Arc<ListPlansHandler>,
        usage: UsageReporter,
    ) -> Self {
        Self {
            tenants,
            plans,
            usage,
        }
    }

    pub async fn handle(&self, user: &AuthenticatedUser) -> Result<AccountOverview, AccountError> {
        let tenant = self
            .tenants
            .find(&user.id)
            .await?
            .ok_or_else(|| AccountError::TenantNotFound(user.id.clone()))?;

        let catalog = PlanCatalog::new(self.plans.handle().await);
        let plan = tenant
            .plan_id
            .as_ref()
            .and_then(|id| catalog.find(id))
            .cloned();
        let usage = self.usage.usage_for_tenant(&tenant.id).await?;

        Ok(AccountOverview {
            tenant,
            plan,
            plans: catalog.into_plans(),
            usage,
        })
    }
}
