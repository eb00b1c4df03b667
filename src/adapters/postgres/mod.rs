//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! - `PostgresCalculatorRepository` - Calculator records and usage counters
//! - `PostgresConfigStore` - JSONB configuration documents
//! - `PostgresPlanRepository` - Plan catalog with startup seeding
//! - `PostgresTenantDirectory` - Tenant accounts and notification targets
//! - `PostgresLeadCounter` - Lead totals

mod calculator_repository;
mod config_store;
mod lead_counter;
mod plan_repository;
mod tenant_directory;

pub use calculator_repository::PostgresCalculatorRepository;
pub use config_store::PostgresConfigStore;
pub use lead_counter::PostgresLeadCounter;
pub use plan_repository::PostgresPlanRepository;
pub use tenant_directory::PostgresTenantDirectory;

use sqlx::postgres::PgRow;
use sqlx::{Decode, Postgres, Row, Type};

use crate::domain::foundation::DomainError;

/// Reads a column, mapping decode failures to a database error.
fn column<'r, T>(row: &'r PgRow, name: &str) -> Result<T, DomainError>
where
    T: Decode<'r, Postgres> + Type<Postgres>,
{
    row.try_get(name)
        .map_err(|e| DomainError::database(format!("Failed to get {}: {}", name, e)))
}

/// Non-negative count stored as a signed integer.
fn to_count(value: i64) -> u64 {
    u64::try_from(value).unwrap_or(0)
}
