//! PostgreSQL implementation of LeadCounter.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::foundation::{DomainError, UserId};
use crate::ports::LeadCounter;

use super::to_count;

#[derive(Clone)]
pub struct PostgresLeadCounter {
    pool: PgPool,
}

impl PostgresLeadCounter {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LeadCounter for PostgresLeadCounter {
    async fn count_by_owner(&self, owner_id: &UserId) -> Result<u64, DomainError> {
        let result: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM leads WHERE owner_id = $1")
            .bind(owner_id.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to count leads: {}", e)))?;

        Ok(to_count(result.0))
    }
}
