//! CreateCalculatorHandler - Creates a calculator within the plan's limit.

use std::sync::Arc;

use crate::domain::calculator::{Calculator, CalculatorError, CalculatorType};
use crate::domain::foundation::AuthenticatedUser;
use crate::domain::plan::{Plan, PlanCatalog};
use crate::domain::usage::{QuotaExceeded, QuotaGuard};
use crate::ports::{CalculatorRepository, LimitedInsert, PlanRepository, TenantDirectory};

#[derive(Debug, Clone)]
pub struct CreateCalculatorCommand {
    pub user: AuthenticatedUser,
    pub name: String,
    /// Raw type name, e.g. `distance`.
    pub calculator_type: String,
}

pub struct CreateCalculatorHandler {
    calculators: Arc<dyn CalculatorRepository>,
    tenants: Arc<dyn TenantDirectory>,
    plans: Arc<dyn PlanRepository>,
}

impl CreateCalculatorHandler {
    pub fn new(
        calculators: Arc<dyn CalculatorRepository>,
        tenants: Arc<dyn TenantDirectory>,
        plans: Arc<dyn PlanRepository>,
    ) -> Self {
        Self {
            calculators,
            tenants,
            plans,
        }
    }

    pub async fn handle(&self, cmd: CreateCalculatorCommand) -> Result<Calculator, CalculatorError> {
        let calculator_type: CalculatorType = cmd.calculator_type.trim().parse()?;
        let calculator = Calculator::create(cmd.name, calculator_type, cmd.user.id.clone())?;

        let plan = if cmd.user.is_admin() {
            None
        } else {
            self.tenant_plan(&cmd.user).await?
        };

        match QuotaGuard::limit_for(&cmd.user, plan.as_ref()) {
            None => self.calculators.save(&calculator).await?,
            Some(limit) => {
                if let LimitedInsert::Refused { current } =
                    self.calculators.save_within_limit(&calculator, limit).await?
                {
                    return Err(QuotaExceeded { limit, current }.into());
                }
            }
        }

        tracing::info!(
            calculator_id = %calculator.id,
            owner_id = %calculator.owner_id,
            calculator_type = %calculator.calculator_type,
            "Calculator created"
        );

        Ok(calculator)
    }

    /// Plan referenced by the tenant record. Unknown tenants and dangling
    /// plan references mean no plan.
    async fn tenant_plan(&self, user: &AuthenticatedUser) -> Result<Option<Plan>, CalculatorError> {
        let Some(plan_id) = self.tenants.find(&user.id).await?.and_then(|t| t.plan_id) else {
            return Ok(None);
        };
        let catalog = PlanCatalog::or_defaults(self.plans.list().await?);
        Ok(catalog.find(&plan_id).cloned())
    }
}
