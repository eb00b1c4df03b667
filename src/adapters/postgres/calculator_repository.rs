//! PostgreSQL implementation of CalculatorRepository and UsageMeter.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Postgres};

use crate::domain::calculator::{Calculator, CalculatorStatus, CalculatorType};
use crate::domain::foundation::{
    CalculatorId, DomainError, ErrorCode, PublicToken, Timestamp, UserId,
};
use crate::ports::{CalculatorRepository, LimitedInsert, UsageMeter};

use super::{column, to_count};

const COLUMNS: &str =
    "id, name, type, owner_id, status, public_token, calc_count, created_at";

#[derive(Clone)]
pub struct PostgresCalculatorRepository {
    pool: PgPool,
}

impl PostgresCalculatorRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CalculatorRepository for PostgresCalculatorRepository {
    async fn save(&self, calculator: &Calculator) -> Result<(), DomainError> {
        insert_calculator(&self.pool, calculator).await
    }

    async fn save_within_limit(
        &self,
        calculator: &Calculator,
        limit: u32,
    ) -> Result<LimitedInsert, DomainError> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Failed to begin transaction: {}", e))
        })?;

        // The owner's row serializes concurrent creates for the same tenant
        sqlx::query("SELECT id FROM users WHERE id = $1 FOR UPDATE")
            .bind(calculator.owner_id.as_str())
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| DomainError::database(format!("Failed to lock tenant: {}", e)))?;

        let (owned,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM calculators WHERE owner_id = $1")
                .bind(calculator.owner_id.as_str())
                .fetch_one(&mut *tx)
                .await
                .map_err(|e| {
                    DomainError::database(format!("Failed to count calculators: {}", e))
                })?;

        let current = u32::try_from(owned).unwrap_or(u32::MAX);
        if current >= limit {
            // Dropping the transaction rolls it back and releases the lock
            return Ok(LimitedInsert::Refused { current });
        }

        insert_calculator(&mut *tx, calculator).await?;

        tx.commit().await.map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Failed to commit transaction: {}", e))
        })?;

        Ok(LimitedInsert::Inserted)
    }

    async fn find_by_id(&self, id: &CalculatorId) -> Result<Option<Calculator>, DomainError> {
        let row = sqlx::query(&format!("SELECT {} FROM calculators WHERE id = $1", COLUMNS))
            .bind(id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to fetch calculator: {}", e)))?;

        row.map(row_to_calculator).transpose()
    }

    async fn find_by_public_link(
        &self,
        owner_id: &UserId,
        token: &str,
    ) -> Result<Option<Calculator>, DomainError> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM calculators WHERE owner_id = $1 AND public_token = $2",
            COLUMNS
        ))
        .bind(owner_id.as_str())
        .bind(token)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::database(format!("Failed to fetch calculator by public link: {}", e))
        })?;

        row.map(row_to_calculator).transpose()
    }

    async fn list_all(&self) -> Result<Vec<Calculator>, DomainError> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM calculators ORDER BY created_at DESC",
            COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to list calculators: {}", e)))?;

        rows.into_iter().map(row_to_calculator).collect()
    }

    async fn list_by_owner(&self, owner_id: &UserId) -> Result<Vec<Calculator>, DomainError> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM calculators WHERE owner_id = $1 ORDER BY created_at DESC",
            COLUMNS
        ))
        .bind(owner_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::database(format!("Failed to list calculators by owner: {}", e))
        })?;

        rows.into_iter().map(row_to_calculator).collect()
    }

    async fn count_by_owner(&self, owner_id: &UserId) -> Result<u32, DomainError> {
        let result: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM calculators WHERE owner_id = $1")
            .bind(owner_id.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to count calculators: {}", e)))?;

        Ok(u32::try_from(result.0).unwrap_or(u32::MAX))
    }

    async fn delete(
        &self,
        id: &CalculatorId,
        owner_id: Option<&UserId>,
    ) -> Result<bool, DomainError> {
        let result = match owner_id {
            Some(owner_id) => {
                sqlx::query("DELETE FROM calculators WHERE id = $1 AND owner_id = $2")
                    .bind(id.as_str())
                    .bind(owner_id.as_str())
                    .execute(&self.pool)
                    .await
            }
            None => {
                sqlx::query("DELETE FROM calculators WHERE id = $1")
                    .bind(id.as_str())
                    .execute(&self.pool)
                    .await
            }
        }
        .map_err(|e| DomainError::database(format!("Failed to delete calculator: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl UsageMeter for PostgresCalculatorRepository {
    async fn record_computation(&self, calculator_id: &str) -> Result<(), DomainError> {
        if calculator_id.is_empty() {
            return Ok(());
        }

        // Single-statement increment; concurrent callers never lose updates
        sqlx::query("UPDATE calculators SET calc_count = calc_count + 1 WHERE id = $1")
            .bind(calculator_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                DomainError::database(format!("Failed to record computation: {}", e))
            })?;

        Ok(())
    }

    async fn calcs_used(&self, owner_id: &UserId) -> Result<u64, DomainError> {
        let result: (i64,) = sqlx::query_as(
            "SELECT COALESCE(SUM(calc_count), 0)::BIGINT FROM calculators WHERE owner_id = $1",
        )
        .bind(owner_id.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to sum computations: {}", e)))?;

        Ok(to_count(result.0))
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

async fn insert_calculator<'e, E>(executor: E, calculator: &Calculator) -> Result<(), DomainError>
where
    E: sqlx::Executor<'e, Database = Postgres>,
{
    sqlx::query(
        r#"
        INSERT INTO calculators (
            id, name, type, owner_id, status, public_token, calc_count, created_at
        ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        "#,
    )
    .bind(calculator.id.as_str())
    .bind(&calculator.name)
    .bind(calculator.calculator_type.as_str())
    .bind(calculator.owner_id.as_str())
    .bind(calculator.status.as_str())
    .bind(calculator.public_token.as_str())
    .bind(i64::try_from(calculator.calc_count).unwrap_or(i64::MAX))
    .bind(calculator.created_at.as_datetime())
    .execute(executor)
    .await
    .map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to insert calculator: {}", e),
        )
    })?;

    Ok(())
}

fn row_to_calculator(row: PgRow) -> Result<Calculator, DomainError> {
    let id: String = column(&row, "id")?;
    let owner_id: String = column(&row, "owner_id")?;
    let calculator_type: String = column(&row, "type")?;
    let status: String = column(&row, "status")?;
    let public_token: String = column(&row, "public_token")?;
    let calc_count: i64 = column(&row, "calc_count")?;
    let created_at: DateTime<Utc> = column(&row, "created_at")?;

    Ok(Calculator {
        id: CalculatorId::new(id)?,
        name: column(&row, "name")?,
        calculator_type: calculator_type
            .parse::<CalculatorType>()
            .map_err(|e| DomainError::database(format!("Invalid calculator type: {}", e)))?,
        owner_id: UserId::new(owner_id)?,
        status: status
            .parse::<CalculatorStatus>()
            .map_err(|e| DomainError::database(format!("Invalid calculator status: {}", e)))?,
        created_at: Timestamp::from_datetime(created_at),
        public_token: PublicToken::from_string(public_token),
        calc_count: to_count(calc_count),
    })
}
