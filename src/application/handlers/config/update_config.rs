//! UpdateConfigHandler - Stores a calculator's configuration.

use std::sync::Arc;

use crate::domain::calculator::{CalculatorConfig, CalculatorError};
use crate::domain::foundation::{AuthenticatedUser, CalculatorId};
use crate::ports::{CalculatorRepository, ConfigStore};

use super::{authorize_calculator, load_distance_config};

/// Layered documents replace the stored one. Distance documents are merged
/// into the effective tariff, so vehicle coefficients accumulate.
#[derive(Debug, Clone)]
pub struct UpdateConfigCommand {
    pub user: AuthenticatedUser,
    pub calculator_id: CalculatorId,
    pub config: CalculatorConfig,
}

pub struct UpdateConfigHandler {
    calculators: Arc<dyn CalculatorRepository>,
    configs: Arc<dyn ConfigStore>,
}

impl UpdateConfigHandler {
    pub fn new(calculators: Arc<dyn CalculatorRepository>, configs: Arc<dyn ConfigStore>) -> Self {
        Self {
            calculators,
            configs,
        }
    }

    /// Returns the document as stored.
    pub async fn handle(&self, cmd: UpdateConfigCommand) -> Result<CalculatorConfig, CalculatorError> {
        authorize_calculator(
            self.calculators.as_ref(),
            &cmd.user,
            &cmd.calculator_id,
            cmd.config.calculator_type(),
        )
        .await?;

        let stored = match cmd.config {
            CalculatorConfig::Layered(config) => {
                config.validate()?;
                CalculatorConfig::Layered(config)
            }
            CalculatorConfig::Distance(update) => {
                let mut merged =
                    load_distance_config(self.configs.as_ref(), Some(&cmd.calculator_id)).await?;
                merged.merge(update);
                merged.validate()?;
                CalculatorConfig::Distance(merged)
            }
        };

        self.configs.save(&cmd.calculator_id, &stored).await?;

        tracing::info!(
            calculator_id = %cmd.calculator_id,
            calculator_type = %stored.calculator_type(),
            "Calculator config updated"
        );

        Ok(stored)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use crate::domain::calculator::CalculatorType;
    use crate::domain::pricing::{DistanceConfig, LayeredConfig};
    use std::collections::BTreeMap;

    #[tokio::test]
    async fn layered_document_replaces_stored() {
        let (calculators, configs, calc) = seeded("alice", CalculatorType::Layered).await;
        let handler = UpdateConfigHandler::new(Arc::new(calculators), Arc::new(configs.clone()));
        let update = LayeredConfig {
            base_price: 150_000.0,
            options: vec![],
            ..Default::default()
        };

        handler
            .handle(UpdateConfigCommand {
                user: user("alice"),
                calculator_id: calc.id.clone(),
                config: CalculatorConfig::Layered(update.clone()),
            })
            .await
            .unwrap();

        let stored = configs.load(&calc.id, CalculatorType::Layered).await.unwrap();
        assert_eq!(stored, Some(CalculatorConfig::Layered(update)));
    }

    #[tokio::test]
    async fn distance_coefficients_merge_into_effective_config() {
        let (calculators, configs, calc) = seeded("alice", CalculatorType::Distance).await;
        let handler = UpdateConfigHandler::new(Arc::new(calculators), Arc::new(configs));
        let update = DistanceConfig {
            vehicle_coefs: BTreeMap::from([("van".to_string(), 1.2)]),
            ..Default::default()
        };

        let stored = handler
            .handle(UpdateConfigCommand {
                user: user("alice"),
                calculator_id: calc.id,
                config: CalculatorConfig::Distance(update),
            })
            .await
            .unwrap();

        let CalculatorConfig::Distance(stored) = stored else {
            panic!("expected distance config");
        };
        assert_eq!(stored.coefficient("van"), 1.2);
        assert_eq!(stored.coefficient("large"), 1.5);
    }

    #[tokio::test]
    async fn invalid_document_is_not_written() {
        let (calculators, configs, calc) = seeded("alice", CalculatorType::Layered).await;
        let handler = UpdateConfigHandler::new(Arc::new(calculators), Arc::new(configs.clone()));
        let update = LayeredConfig {
            base_price: -5.0,
            ..Default::default()
        };

        let result = handler
            .handle(UpdateConfigCommand {
                user: user("alice"),
                calculator_id: calc.id.clone(),
                config: CalculatorConfig::Layered(update),
            })
            .await;

        assert!(matches!(result, Err(CalculatorError::Validation(_))));
        assert_eq!(configs.load(&calc.id, CalculatorType::Layered).await.unwrap(), None);
    }

    #[tokio::test]
    async fn document_type_must_match_calculator() {
        let (calculators, configs, calc) = seeded("alice", CalculatorType::Layered).await;
        let handler = UpdateConfigHandler::new(Arc::new(calculators), Arc::new(configs));

        let result = handler
            .handle(UpdateConfigCommand {
                user: user("alice"),
                calculator_id: calc.id,
                config: CalculatorConfig::Distance(DistanceConfig::default()),
            })
            .await;

        assert_eq!(result.unwrap_err(), CalculatorError::Forbidden);
    }
}
