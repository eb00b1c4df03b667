//! Per-calculator pricing configuration.

use crate::domain::pricing::{DistanceConfig, LayeredConfig};

use super::CalculatorType;

/// Stored configuration document, typed by calculator kind.
///
/// Mortgage and on-site calculators carry no configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum CalculatorConfig {
    Layered(LayeredConfig),
    Distance(DistanceConfig),
}

impl CalculatorConfig {
    /// Default configuration for a calculator type, if the type has one.
    pub fn default_for(calculator_type: CalculatorType) -> Option<Self> {
        match calculator_type {
            CalculatorType::Layered => Some(CalculatorConfig::Layered(LayeredConfig::default())),
            CalculatorType::Distance => Some(CalculatorConfig::Distance(DistanceConfig::default())),
            CalculatorType::OnSite | CalculatorType::Mortgage => None,
        }
    }

    pub fn calculator_type(&self) -> CalculatorType {
        match self {
            CalculatorConfig::Layered(_) => CalculatorType::Layered,
            CalculatorConfig::Distance(_) => CalculatorType::Distance,
        }
    }
}
