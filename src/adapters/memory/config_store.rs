//! In-memory calculator configuration documents.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::calculator::{CalculatorConfig, CalculatorType};
use crate::domain::foundation::{CalculatorId, DomainError};
use crate::ports::ConfigStore;

#[derive(Debug, Clone, Default)]
pub struct InMemoryConfigStore {
    documents: Arc<RwLock<HashMap<CalculatorId, CalculatorConfig>>>,
}

impl InMemoryConfigStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ConfigStore for InMemoryConfigStore {
    async fn load(
        &self,
        calculator_id: &CalculatorId,
        calculator_type: CalculatorType,
    ) -> Result<Option<CalculatorConfig>, DomainError> {
        let documents = self.documents.read().await;
        Ok(documents
            .get(calculator_id)
            .filter(|c| c.calculator_type() == calculator_type)
            .cloned())
    }

    async fn save(
        &self,
        calculator_id: &CalculatorId,
        config: &CalculatorConfig,
    ) -> Result<(), DomainError> {
        self.documents
            .write()
            .await
            .insert(calculator_id.clone(), config.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::pricing::{DistanceConfig, LayeredConfig};

    #[tokio::test]
    async fn saved_document_is_returned_for_matching_type_only() {
        let store = InMemoryConfigStore::new();
        let id = CalculatorId::new("calc_1").unwrap();
        let config = CalculatorConfig::Distance(DistanceConfig {
            price_per_km: 60.0,
            ..Default::default()
        });
        store.save(&id, &config).await.unwrap();

        assert_eq!(
            store.load(&id, CalculatorType::Distance).await.unwrap(),
            Some(config)
        );
        assert_eq!(store.load(&id, CalculatorType::Layered).await.unwrap(), None);
    }

    #[tokio::test]
    async fn save_replaces_previous_document() {
        let store = InMemoryConfigStore::new();
        let id = CalculatorId::new("calc_1").unwrap();
        store
            .save(&id, &CalculatorConfig::Layered(LayeredConfig::default()))
            .await
            .unwrap();
        let updated = CalculatorConfig::Layered(LayeredConfig {
            base_price: 10.0,
            ..Default::default()
        });
        store.save(&id, &updated).await.unwrap();

        assert_eq!(
            store.load(&id, CalculatorType::Layered).await.unwrap(),
            Some(updated)
        );
    }
}
