//! GetConfigHandler - Effective configuration of a calculator.

use std::sync::Arc;

use crate::domain::calculator::{CalculatorConfig, CalculatorError, CalculatorType};
use crate::domain::foundation::{AuthenticatedUser, CalculatorId};
use crate::ports::{CalculatorRepository, ConfigStore};

use super::{authorize_calculator, load_distance_config, load_layered_config};

#[derive(Debug, Clone)]
pub struct GetConfigQuery {
    pub user: AuthenticatedUser,
    pub calculator_id: CalculatorId,
    pub calculator_type: CalculatorType,
}

pub struct GetConfigHandler {
    calculators: Arc<dyn CalculatorRepository>,
    configs: Arc<dyn ConfigStore>,
}

impl GetConfigHandler {
    pub fn new(calculators: Arc<dyn CalculatorRepository>, configs: Arc<dyn ConfigStore>) -> Self {
        Self {
            calculators,
            configs,
        }
    }

    pub async fn handle(&self, query: GetConfigQuery) -> Result<CalculatorConfig, CalculatorError> {
        authorize_calculator(
            self.calculators.as_ref(),
            &query.user,
            &query.calculator_id,
            query.calculator_type,
        )
        .await?;

        let store = self.configs.as_ref();
        let id = Some(&query.calculator_id);
        match query.calculator_type {
            CalculatorType::Layered => Ok(CalculatorConfig::Layered(
                load_layered_config(store, id).await?,
            )),
            CalculatorType::Distance => Ok(CalculatorConfig::Distance(
                load_distance_config(store, id).await?,
            )),
            // Unconfigurable types never pass the route layer
            CalculatorType::OnSite | CalculatorType::Mortgage => Err(CalculatorError::forbidden()),
        }
    }
}
