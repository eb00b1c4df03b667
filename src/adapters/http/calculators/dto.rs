//! HTTP DTOs for calculator management.

use serde::{Deserialize, Serialize};

use crate::domain::calculator::{Calculator, CalculatorStatus, CalculatorType};
use crate::domain::foundation::Timestamp;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateCalculatorRequest {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub calculator_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorResponse {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub calculator_type: CalculatorType,
    pub owner_id: String,
    pub status: CalculatorStatus,
    pub created_at: Timestamp,
    pub public_token: String,
    pub public_path: String,
    pub calc_count: u64,
}

impl From<Calculator> for CalculatorResponse {
    fn from(calc: Calculator) -> Self {
        Self {
            public_path: calc.public_path(),
            id: calc.id.to_string(),
            name: calc.name,
            calculator_type: calc.calculator_type,
            owner_id: calc.owner_id.to_string(),
            status: calc.status,
            created_at: calc.created_at,
            public_token: calc.public_token.as_str().to_string(),
            calc_count: calc.calc_count,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorListResponse {
    pub items: Vec<CalculatorResponse>,
}

impl From<Vec<Calculator>> for CalculatorListResponse {
    fn from(calculators: Vec<Calculator>) -> Self {
        Self {
            items: calculators.into_iter().map(Into::into).collect(),
        }
    }
}
