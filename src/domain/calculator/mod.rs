//! Calculators owned by tenants and published through public links.

mod calculator;
mod config;
mod errors;

pub use calculator::{Calculator, CalculatorStatus, CalculatorType};
pub use config::CalculatorConfig;
pub use errors::CalculatorError;
