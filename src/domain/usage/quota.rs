//! Quota policy.

use serde::Serialize;
use thiserror::Error;

use crate::domain::foundation::AuthenticatedUser;
use crate::domain::plan::Plan;

/// Creation refused because the plan's calculator limit is reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("calculator limit reached: {current} of {limit}")]
pub struct QuotaExceeded {
    pub limit: u32,
    pub current: u32,
}

/// Enforces the max-calculators limit at creation time.
pub struct QuotaGuard;

impl QuotaGuard {
    /// Calculator cap that applies to `tenant`, if any.
    ///
    /// Admins, tenants without a plan and plans with a zero limit are uncapped.
    pub fn limit_for(tenant: &AuthenticatedUser, plan: Option<&Plan>) -> Option<u32> {
        if tenant.is_admin() {
            return None;
        }
        plan.filter(|p| p.limits_calculators())
            .map(|p| p.max_calculators)
    }

    /// Admins and tenants without a limiting plan are never refused.
    pub fn check_create(
        tenant: &AuthenticatedUser,
        plan: Option<&Plan>,
        existing_count: u32,
    ) -> Result<(), QuotaExceeded> {
        match Self::limit_for(tenant, plan) {
            Some(limit) if existing_count >= limit => Err(QuotaExceeded {
                limit,
                current: existing_count,
            }),
            _ => Ok(()),
        }
    }
}

/// Consumption figures reported to the tenant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TenantUsage {
    pub leads_used: u64,
    pub calcs_used: u64,
}
