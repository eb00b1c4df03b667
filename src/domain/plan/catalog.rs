//! Plan registry.

use crate::domain::foundation::PlanId;

use super::Plan;

/// Ordered set of plans, looked up by id.
///
/// Built from storage on each request; [`default_plans`] is the seed and the
/// fallback when storage has none.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanCatalog {
    plans: Vec<Plan>,
}

impl PlanCatalog {
    /// Orders plans by price, then id.
    pub fn new(mut plans: Vec<Plan>) -> Self {
        plans.sort_by(|a, b| a.price.total_cmp(&b.price).then_with(|| a.id.cmp(&b.id)));
        Self { plans }
    }

    /// Catalog with the built-in plans.
    pub fn with_defaults() -> Self {
        Self::new(default_plans())
    }

    /// Uses `plans` unless empty, in which case the defaults apply.
    pub fn or_defaults(plans: Vec<Plan>) -> Self {
        if plans.is_empty() {
            Self::with_defaults()
        } else {
            Self::new(plans)
        }
    }

    pub fn find(&self, id: &PlanId) -> Option<&Plan> {
        self.plans.iter().find(|p| &p.id == id)
    }

    pub fn plans(&self) -> &[Plan] {
        &self.plans
    }

    pub fn into_plans(self) -> Vec<Plan> {
        self.plans
    }

    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }
}

/// The three built-in plans.
///
/// | Plan  | Price | Calculators | Leads   | Calcs   |
/// |-------|-------|-------------|---------|---------|
/// | basic | 990   | 2           | 200     | 400     |
/// | pro   | 2990  | 10          | 2000    | 4000    |
/// | max   | 7990  | 999         | 100000  | 200000  |
pub fn default_plans() -> Vec<Plan> {
    vec![
        builtin(
            "basic",
            "Базовый",
            "Для небольшого бизнеса: 1–2 калькулятора и базовая аналитика.",
            990.0,
            (2, 200, 400),
        ),
        builtin(
            "pro",
            "Pro",
            "Для компаний, у которых несколько направлений и реклама.",
            2990.0,
            (10, 2000, 4000),
        ),
        builtin(
            "max",
            "Max",
            "Агентства и сети: безлим по калькуляторам и расширенные лимиты.",
            7990.0,
            (999, 100_000, 200_000),
        ),
    ]
}

fn builtin(id: &'static str, name: &str, description: &str, price: f64, limits: (u32, u32, u32)) -> Plan {
    let (max_calculators, max_leads, max_calcs) = limits;
    Plan {
        id: PlanId::builtin(id),
        name: name.to_string(),
        description: description.to_string(),
        price,
        max_calculators,
        max_leads,
        max_calcs,
    }
}
