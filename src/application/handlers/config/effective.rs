//! Effective configuration lookup.
//!
//! The stored document wins; without one the calculator type default
//! applies. An absent calculator id always means the default.

use crate::domain::calculator::{CalculatorConfig, CalculatorType};
use crate::domain::foundation::{CalculatorId, DomainError};
use crate::domain::pricing::{DistanceConfig, LayeredConfig};
use crate::ports::ConfigStore;

pub async fn load_layered_config(
    store: &dyn ConfigStore,
    calculator_id: Option<&CalculatorId>,
) -> Result<LayeredConfig, DomainError> {
    let Some(id) = calculator_id else {
        return Ok(LayeredConfig::default());
    };
    match store.load(id, CalculatorType::Layered).await? {
        Some(CalculatorConfig::Layered(config)) => Ok(config),
        _ => Ok(LayeredConfig::default()),
    }
}

pub async fn load_distance_config(
    store: &dyn ConfigStore,
    calculator_id: Option<&CalculatorId>,
) -> Result<DistanceConfig, DomainError> {
    let Some(id) = calculator_id else {
        return Ok(DistanceConfig::default());
    };
    match store.load(id, CalculatorType::Distance).await? {
        Some(CalculatorConfig::Distance(config)) => Ok(config),
        _ => Ok(DistanceConfig::default()),
    }
}
