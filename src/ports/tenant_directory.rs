//! TenantDirectory port - Tenant accounts.

use async_trait::async_trait;

use crate::domain::calculator::CalculatorType;
use crate::domain::foundation::{CalculatorId, DomainError, PlanId, UserId};
use crate::domain::tenant::Tenant;

/// Where and how to announce a computation on a calculator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationTarget {
    pub chat_id: String,
    pub calculator_name: String,
    pub calculator_type: CalculatorType,
}

#[async_trait]
pub trait TenantDirectory: Send + Sync {
    async fn find(&self, id: &UserId) -> Result<Option<Tenant>, DomainError>;

    /// Sets or clears the tenant's bot chat id. Returns false for unknown tenants.
    async fn set_telegram_chat_id(
        &self,
        id: &UserId,
        chat_id: Option<&str>,
    ) -> Result<bool, DomainError>;

    /// Points the tenant at `plan_id` and marks the plan active. Returns
    /// false for unknown tenants.
    async fn set_plan(&self, id: &UserId, plan_id: &PlanId) -> Result<bool, DomainError>;

    /// Owner chat for a calculator; `None` when the calculator is unknown or
    /// its owner has no chat configured.
    async fn notification_target(
        &self,
        calculator_id: &CalculatorId,
    ) -> Result<Option<NotificationTarget>, DomainError>;
}
