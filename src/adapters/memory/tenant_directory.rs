//! In-memory tenant accounts.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{CalculatorId, DomainError, PlanId, UserId};
use crate::domain::tenant::Tenant;
use crate::ports::{CalculatorRepository, NotificationTarget, TenantDirectory};

use super::InMemoryCalculatorRepository;

/// Tenants keyed by id. Reads calculators from the shared repository to
/// resolve notification targets.
#[derive(Debug, Clone)]
pub struct InMemoryTenantDirectory {
    tenants: Arc<RwLock<HashMap<UserId, Tenant>>>,
    calculators: InMemoryCalculatorRepository,
}

impl InMemoryTenantDirectory {
    pub fn new(calculators: InMemoryCalculatorRepository) -> Self {
        Self {
            tenants: Arc::new(RwLock::new(HashMap::new())),
            calculators,
        }
    }

    /// Adds or replaces a tenant.
    pub async fn insert(&self, tenant: Tenant) {
        self.tenants.write().await.insert(tenant.id.clone(), tenant);
    }
}

#[async_trait]
impl TenantDirectory for InMemoryTenantDirectory {
    async fn find(&self, id: &UserId) -> Result<Option<Tenant>, DomainError> {
        Ok(self.tenants.read().await.get(id).cloned())
    }

    async fn set_telegram_chat_id(
        &self,
        id: &UserId,
        chat_id: Option<&str>,
    ) -> Result<bool, DomainError> {
        let mut tenants = self.tenants.write().await;
        match tenants.get_mut(id) {
            Some(tenant) => {
                tenant.telegram_chat_id = chat_id.map(str::to_string);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn set_plan(&self, id: &UserId, plan_id: &PlanId) -> Result<bool, DomainError> {
        let mut tenants = self.tenants.write().await;
        let Some(tenant) = tenants.get_mut(id) else {
            return Ok(false);
        };
        tenant.plan_id = Some(plan_id.clone());
        tenant.plan_active = true;
        Ok(true)
    }

    async fn notification_target(
        &self,
        calculator_id: &CalculatorId,
    ) -> Result<Option<NotificationTarget>, DomainError> {
        let Some(calculator) = self.calculators.find_by_id(calculator_id).await? else {
            return Ok(None);
        };
        let tenants = self.tenants.read().await;
        let chat_id = tenants
            .get(&calculator.owner_id)
            .and_then(|t| t.telegram_chat_id.as_deref())
            .and_then(Tenant::normalize_chat_id);

        Ok(chat_id.map(|chat_id| NotificationTarget {
            chat_id,
            calculator_name: calculator.name,
            calculator_type: calculator.calculator_type,
        }))
    }
}
