//! Calculator access checks for configuration endpoints.

use crate::domain::calculator::{Calculator, CalculatorError, CalculatorType};
use crate::domain::foundation::{AuthenticatedUser, CalculatorId};
use crate::ports::CalculatorRepository;

/// Loads the calculator and checks the caller may configure it as `expected`.
///
/// Unknown calculators are `NotFound`. Foreign calculators and type
/// mismatches are both `Forbidden`.
pub async fn authorize_calculator(
    calculators: &dyn CalculatorRepository,
    user: &AuthenticatedUser,
    calculator_id: &CalculatorId,
    expected: CalculatorType,
) -> Result<Calculator, CalculatorError> {
    let calculator = calculators
        .find_by_id(calculator_id)
        .await?
        .ok_or_else(|| CalculatorError::not_found(calculator_id.clone()))?;

    if !user.can_manage(&calculator.owner_id) {
        return Err(CalculatorError::forbidden());
    }
    if calculator.calculator_type != expected {
        return Err(CalculatorError::forbidden());
    }
    Ok(calculator)
}
