//! Annuity mortgage pricing.

use crate::domain::foundation::ValidationError;

use super::PricingError;

/// Loan parameters. `rate` is the annual percentage, e.g. `12.0` for 12 %.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MortgageInput {
    pub amount: f64,
    pub rate: f64,
    pub years: i64,
}

impl MortgageInput {
    fn validate(&self) -> Result<(), ValidationError> {
        if !self.amount.is_finite() {
            return Err(ValidationError::not_finite("amount"));
        }
        if !self.rate.is_finite() {
            return Err(ValidationError::not_finite("rate"));
        }
        if self.amount <= 0.0 {
            return Err(ValidationError::not_positive("amount", self.amount));
        }
        if self.years <= 0 {
            return Err(ValidationError::not_positive("years", self.years as f64));
        }
        if self.rate < 0.0 {
            return Err(ValidationError::negative("rate", self.rate));
        }
        Ok(())
    }
}

/// Unrounded payment schedule summary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MortgageQuote {
    pub monthly: f64,
    pub total: f64,
    pub overpayment: f64,
}

impl MortgageQuote {
    /// Presentation form, each figure rounded half away from zero to 2 decimals.
    pub fn rounded(&self) -> Self {
        Self {
            monthly: round2(self.monthly),
            total: round2(self.total),
            overpayment: round2(self.overpayment),
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Fixed monthly payment over `years * 12` months.
///
/// A zero rate splits the amount evenly; otherwise the annuity factor
/// `r(1+r)^n / ((1+r)^n - 1)` applies with `r = rate / 100 / 12`.
pub fn price_mortgage(input: MortgageInput) -> Result<MortgageQuote, PricingError> {
    input.validate()?;

    let months = (input.years as f64) * 12.0;
    let monthly_rate = input.rate / 100.0 / 12.0;

    let monthly = if monthly_rate == 0.0 {
        input.amount / months
    } else {
        let growth = (1.0 + monthly_rate).powf(months);
        input.amount * monthly_rate * growth / (growth - 1.0)
    };

    if !monthly.is_finite() {
        return Err(ValidationError::invalid_format("years", "term is too long to price").into());
    }

    let total = monthly * months;
    let quote = MortgageQuote {
        monthly,
        total,
        overpayment: total - input.amount,
    };
    // Every figure must survive `round2` without overflowing.
    if [quote.monthly, quote.total, quote.overpayment]
        .iter()
        .any(|figure| !(figure * 100.0).is_finite())
    {
        return Err(ValidationError::invalid_format("amount", "amount is too large to price").into());
    }
    Ok(quote)
}
