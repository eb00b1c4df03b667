//! Subscription plans and their quotas.

mod catalog;
mod plan;

pub use catalog::{default_plans, PlanCatalog};
pub use plan::Plan;
