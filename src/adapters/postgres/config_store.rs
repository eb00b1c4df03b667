//! PostgreSQL implementation of ConfigStore.
//!
//! Documents are stored as JSONB and exchanged with the database as text.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::calculator::{CalculatorConfig, CalculatorType};
use crate::domain::foundation::{CalculatorId, DomainError};
use crate::ports::ConfigStore;

#[derive(Clone)]
pub struct PostgresConfigStore {
    pool: PgPool,
}

impl PostgresConfigStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ConfigStore for PostgresConfigStore {
    async fn load(
        &self,
        calculator_id: &CalculatorId,
        calculator_type: CalculatorType,
    ) -> Result<Option<CalculatorConfig>, DomainError> {
        let row: Option<(String, String)> = sqlx::query_as(
            "SELECT type, document::TEXT FROM calculator_configs WHERE calculator_id = $1",
        )
        .bind(calculator_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to fetch config: {}", e)))?;

        let Some((stored_type, document)) = row else {
            return Ok(None);
        };
        if stored_type != calculator_type.as_str() {
            return Ok(None);
        }

        decode(calculator_type, &document).map_err(|e| {
            DomainError::database(format!(
                "Corrupt config for calculator {}: {}",
                calculator_id, e
            ))
        })
    }

    async fn save(
        &self,
        calculator_id: &CalculatorId,
        config: &CalculatorConfig,
    ) -> Result<(), DomainError> {
        let document = encode(config)
            .map_err(|e| DomainError::database(format!("Failed to encode config: {}", e)))?;

        sqlx::query(
            r#"
            INSERT INTO calculator_configs (calculator_id, type, document, updated_at)
            VALUES ($1, $2, $3::JSONB, now())
            ON CONFLICT (calculator_id) DO UPDATE SET
                type = EXCLUDED.type,
                document = EXCLUDED.document,
                updated_at = EXCLUDED.updated_at
            "#,
        )
        .bind(calculator_id.as_str())
        .bind(config.calculator_type().as_str())
        .bind(document)
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to save config: {}", e)))?;

        Ok(())
    }
}

fn encode(config: &CalculatorConfig) -> Result<String, serde_json::Error> {
    match config {
        CalculatorConfig::Layered(c) => serde_json::to_string(c),
        CalculatorConfig::Distance(c) => serde_json::to_string(c),
    }
}

fn decode(
    calculator_type: CalculatorType,
    document: &str,
) -> Result<Option<CalculatorConfig>, serde_json::Error> {
    Ok(match calculator_type {
        CalculatorType::Layered => Some(CalculatorConfig::Layered(serde_json::from_str(document)?)),
        CalculatorType::Distance => {
            Some(CalculatorConfig::Distance(serde_json::from_str(document)?))
        }
        CalculatorType::OnSite | CalculatorType::Mortgage => None,
    })
}
