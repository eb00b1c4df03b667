//! Plan value object.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::PlanId;

/// Named tier with quotas.
///
/// A `max_calculators` of 0 means the limit is not enforced. Large values
/// such as 999 act as a practical "unlimited".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    pub id: PlanId,
    pub name: String,
    pub description: String,
    /// Monthly price in currency units.
    pub price: f64,
    pub max_calculators: u32,
    pub max_leads: u32,
    /// Computations per period. Reported in usage, not enforced at compute time.
    pub max_calcs: u32,
}

impl Plan {
    /// True when the calculator quota applies to this plan.
    pub fn limits_calculators(&self) -> bool {
        self.max_calculators > 0
    }
}
