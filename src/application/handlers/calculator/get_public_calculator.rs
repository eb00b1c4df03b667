//! GetPublicCalculatorHandler - Resolves a public widget link.

use std::sync::Arc;

use crate::domain::calculator::{Calculator, CalculatorConfig, CalculatorError};
use crate::domain::foundation::UserId;
use crate::ports::{CalculatorRepository, ConfigStore};

#[derive(Debug, Clone)]
pub struct GetPublicCalculatorQuery {
    pub owner_id: String,
    pub token: String,
}

/// What an anonymous visitor needs to render the widget.
#[derive(Debug, Clone, PartialEq)]
pub struct PublicCalculatorView {
    pub calculator: Calculator,
    /// Effective configuration; `None` for unconfigurable types.
    pub config: Option<CalculatorConfig>,
}

pub struct GetPublicCalculatorHandler {
    calculators: Arc<dyn CalculatorRepository>,
    configs: Arc<dyn ConfigStore>,
}

impl GetPublicCalculatorHandler {
    pub fn new(calculators: Arc<dyn CalculatorRepository>, configs: Arc<dyn ConfigStore>) -> Self {
        Self {
            calculators,
            configs,
        }
    }

    pub async fn handle(
        &self,
        query: GetPublicCalculatorQuery,
    ) -> Result<PublicCalculatorView, CalculatorError> {
        let token = query.token.trim();
        let owner_id = UserId::new(query.owner_id.trim()).map_err(|_| CalculatorError::LinkNotFound)?;
        if token.is_empty() {
            return Err(CalculatorError::LinkNotFound);
        }

        let calculator = self
            .calculators
            .find_by_public_link(&owner_id, token)
            .await?
            .ok_or(CalculatorError::LinkNotFound)?;

        let config = match self
            .configs
            .load(&calculator.id, calculator.calculator_type)
            .await?
        {
            Some(stored) => Some(stored),
            None => CalculatorConfig::default_for(calculator.calculator_type),
        };

        Ok(PublicCalculatorView { calculator, config })
    }
}
