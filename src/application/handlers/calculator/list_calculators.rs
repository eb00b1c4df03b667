//! ListCalculatorsHandler - Calculators visible to the caller.

use std::sync::Arc;

use crate::domain::calculator::{Calculator, CalculatorError};
use crate::domain::foundation::AuthenticatedUser;
use crate::ports::CalculatorRepository;

pub struct ListCalculatorsHandler {
    calculators: Arc<dyn CalculatorRepository>,
}

impl ListCalculatorsHandler {
    pub fn new(calculators: Arc<dyn CalculatorRepository>) -> Self {
        Self { calculators }
    }

    /// Admins see every calculator, tenants only their own. Newest first.
    pub async fn handle(&self, user: &AuthenticatedUser) -> Result<Vec<Calculator>, CalculatorError> {
        let calculators = if user.is_admin() {
            self.calculators.list_all().await?
        } else {
            self.calculators.list_by_owner(&user.id).await?
        };
        Ok(calculators)
    }
}
