//! Usage figures for a tenant.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::usage::TenantUsage;
use crate::ports::{LeadCounter, UsageMeter};

#[derive(Clone)]
pub struct UsageReporter {
    meter: Arc<dyn UsageMeter>,
    leads: Arc<dyn LeadCounter>,
}

impl UsageReporter {
    pub fn new(meter: Arc<dyn UsageMeter>, leads: Arc<dyn LeadCounter>) -> Self {
        Self { meter, leads }
    }

    /// Lead counting failures read as zero; computation counter failures
    /// are returned.
    pub async fn usage_for_tenant(&self, owner_id: &UserId) -> Result<TenantUsage, DomainError> {
        let calcs_used = self.meter.calcs_used(owner_id).await?;
        let leads_used = match self.leads.count_by_owner(owner_id).await {
            Ok(count) => count,
            Err(e) => {
                tracing::warn!(%owner_id, error = %e, "Lead count unavailable");
                0
            }
        };
        Ok(TenantUsage {
            leads_used,
            calcs_used,
        })
    }
}
