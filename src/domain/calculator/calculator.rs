//! Calculator entity.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{CalculatorId, PublicToken, Timestamp, UserId, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalculatorType {
    Layered,
    Distance,
    OnSite,
    Mortgage,
}

impl CalculatorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CalculatorType::Layered => "layered",
            CalculatorType::Distance => "distance",
            CalculatorType::OnSite => "on_site",
            CalculatorType::Mortgage => "mortgage",
        }
    }
}

impl fmt::Display for CalculatorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CalculatorType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "layered" => Ok(CalculatorType::Layered),
            "distance" => Ok(CalculatorType::Distance),
            "on_site" => Ok(CalculatorType::OnSite),
            "mortgage" => Ok(CalculatorType::Mortgage),
            other => Err(ValidationError::invalid_format(
                "type",
                format!("unknown calculator type '{}'", other),
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CalculatorStatus {
    #[default]
    Draft,
    Published,
    Archived,
}

impl CalculatorStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CalculatorStatus::Draft => "draft",
            CalculatorStatus::Published => "published",
            CalculatorStatus::Archived => "archived",
        }
    }
}

impl FromStr for CalculatorStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(CalculatorStatus::Draft),
            "published" => Ok(CalculatorStatus::Published),
            "archived" => Ok(CalculatorStatus::Archived),
            other => Err(ValidationError::invalid_format(
                "status",
                format!("unknown status '{}'", other),
            )),
        }
    }
}

/// A tenant's calculator instance.
#[derive(Debug, Clone, PartialEq)]
pub struct Calculator {
    pub id: CalculatorId,
    pub name: String,
    pub calculator_type: CalculatorType,
    pub owner_id: UserId,
    pub status: CalculatorStatus,
    pub created_at: Timestamp,
    pub public_token: PublicToken,
    /// Computations recorded against this calculator.
    pub calc_count: u64,
}

impl Calculator {
    /// New draft calculator with a fresh id and public token.
    pub fn create(
        name: impl Into<String>,
        calculator_type: CalculatorType,
        owner_id: UserId,
    ) -> Result<Self, ValidationError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        Ok(Self {
            id: CalculatorId::generate(),
            name,
            calculator_type,
            owner_id,
            status: CalculatorStatus::Draft,
            created_at: Timestamp::now(),
            public_token: PublicToken::generate(),
            calc_count: 0,
        })
    }

    /// Path of the public widget page.
    pub fn public_path(&self) -> String {
        format!("/p/{}/{}", self.owner_id, self.public_token)
    }
}
