//! PostgreSQL implementation of PlanRepository.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;

use crate::domain::foundation::{DomainError, PlanId};
use crate::domain::plan::Plan;
use crate::ports::PlanRepository;

use super::column;

#[derive(Clone)]
pub struct PostgresPlanRepository {
    pool: PgPool,
}

impl PostgresPlanRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PlanRepository for PostgresPlanRepository {
    async fn list(&self) -> Result<Vec<Plan>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, description, price::FLOAT8 AS price,
                   max_calculators, max_leads, max_calcs
            FROM plans
            ORDER BY price, id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to list plans: {}", e)))?;

        rows.into_iter().map(row_to_plan).collect()
    }

    async fn seed_if_empty(&self, plans: &[Plan]) -> Result<usize, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::database(format!("Failed to begin transaction: {}", e)))?;

        let existing: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM plans")
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| DomainError::database(format!("Failed to count plans: {}", e)))?;
        if existing.0 > 0 {
            return Ok(0);
        }

        let mut inserted = 0;
        for plan in plans {
            let result = sqlx::query(
                r#"
                INSERT INTO plans (id, name, description, price, max_calculators, max_leads, max_calcs)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
                ON CONFLICT (id) DO NOTHING
                "#,
            )
            .bind(plan.id.as_str())
            .bind(&plan.name)
            .bind(&plan.description)
            .bind(plan.price)
            .bind(to_db_int(plan.max_calculators))
            .bind(to_db_int(plan.max_leads))
            .bind(to_db_int(plan.max_calcs))
            .execute(&mut *tx)
            .await
            .map_err(|e| DomainError::database(format!("Failed to insert plan: {}", e)))?;
            inserted += result.rows_affected() as usize;
        }

        tx.commit()
            .await
            .map_err(|e| DomainError::database(format!("Failed to commit plans: {}", e)))?;

        tracing::info!(inserted, "Seeded default plans");
        Ok(inserted)
    }
}

fn to_db_int(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

fn from_db_int(value: i32) -> u32 {
    u32::try_from(value).unwrap_or(0)
}

fn row_to_plan(row: PgRow) -> Result<Plan, DomainError> {
    let id: String = column(&row, "id")?;
    Ok(Plan {
        id: PlanId::new(id)?,
        name: column(&row, "name")?,
        description: column(&row, "description")?,
        price: column(&row, "price")?,
        max_calculators: from_db_int(column(&row, "max_calculators")?),
        max_leads: from_db_int(column(&row, "max_leads")?),
        max_calcs: from_db_int(column(&row, "max_calcs")?),
    })
}
