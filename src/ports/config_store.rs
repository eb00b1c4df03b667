//! ConfigStore port - Per-calculator configuration documents.

use async_trait::async_trait;

use crate::domain::calculator::{CalculatorConfig, CalculatorType};
use crate::domain::foundation::{CalculatorId, DomainError};

/// Storage for calculator configurations. Storage is the single source of
/// truth; absent documents mean "use the type default".
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Loads the stored document for a calculator of the given type.
    async fn load(
        &self,
        calculator_id: &CalculatorId,
        calculator_type: CalculatorType,
    ) -> Result<Option<CalculatorConfig>, DomainError>;

    /// Replaces the stored document.
    async fn save(
        &self,
        calculator_id: &CalculatorId,
        config: &CalculatorConfig,
    ) -> Result<(), DomainError>;
}
