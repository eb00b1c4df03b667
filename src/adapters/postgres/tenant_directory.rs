//! PostgreSQL implementation of TenantDirectory over the `users` table.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::calculator::CalculatorType;
use crate::domain::foundation::{CalculatorId, DomainError, PlanId, Role, Timestamp, UserId};
use crate::domain::tenant::Tenant;
use crate::ports::{NotificationTarget, TenantDirectory};

use super::column;

#[derive(Clone)]
pub struct PostgresTenantDirectory {
    pool: PgPool,
}

impl PostgresTenantDirectory {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TenantDirectory for PostgresTenantDirectory {
    async fn find(&self, id: &UserId) -> Result<Option<Tenant>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, email, name, role, plan_id, plan_active, created_at, telegram_chat_id
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to fetch tenant: {}", e)))?;

        let Some(row) = row else {
            return Ok(None);
        };

        let id: String = column(&row, "id")?;
        let role: String = column(&row, "role")?;
        let plan_id: Option<String> = column(&row, "plan_id")?;
        let created_at: DateTime<Utc> = column(&row, "created_at")?;
        let telegram_chat_id: Option<String> = column(&row, "telegram_chat_id")?;

        Ok(Some(Tenant {
            id: UserId::new(id)?,
            email: column(&row, "email")?,
            name: column(&row, "name")?,
            role: role
                .parse::<Role>()
                .map_err(|e| DomainError::database(format!("Invalid role: {}", e)))?,
            plan_id: plan_id.and_then(|p| PlanId::new(p).ok()),
            plan_active: column(&row, "plan_active")?,
            created_at: Timestamp::from_datetime(created_at),
            telegram_chat_id: telegram_chat_id.as_deref().and_then(Tenant::normalize_chat_id),
        }))
    }

    async fn set_telegram_chat_id(
        &self,
        id: &UserId,
        chat_id: Option<&str>,
    ) -> Result<bool, DomainError> {
        let result = sqlx::query("UPDATE users SET telegram_chat_id = $2 WHERE id = $1")
            .bind(id.as_str())
            .bind(chat_id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to update chat id: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }

    async fn set_plan(&self, id: &UserId, plan_id: &PlanId) -> Result<bool, DomainError> {
        let result =
            sqlx::query("UPDATE users SET plan_id = $2, plan_active = TRUE WHERE id = $1")
                .bind(id.as_str())
                .bind(plan_id.as_str())
                .execute(&self.pool)
                .await
                .map_err(|e| DomainError::database(format!("Failed to update plan: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }

    async fn notification_target(
        &self,
        calculator_id: &CalculatorId,
    ) -> Result<Option<NotificationTarget>, DomainError> {
        let row: Option<(String, String, String)> = sqlx::query_as(
            r#"
            SELECT c.name, c.type, COALESCE(u.telegram_chat_id, '')
            FROM calculators c
            JOIN users u ON u.id = c.owner_id
            WHERE c.id = $1
            "#,
        )
        .bind(calculator_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::database(format!("Failed to look up notification target: {}", e))
        })?;

        let Some((calculator_name, calculator_type, chat_id)) = row else {
            return Ok(None);
        };
        let Some(chat_id) = Tenant::normalize_chat_id(&chat_id) else {
            return Ok(None);
        };

        Ok(Some(NotificationTarget {
            chat_id,
            calculator_name,
            calculator_type: calculator_type
                .parse::<CalculatorType>()
                .map_err(|e| DomainError::database(format!("Invalid calculator type: {}", e)))?,
        }))
    }
}
