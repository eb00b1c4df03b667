//! Calculator management handlers.

mod create_calculator;
mod delete_calculator;
mod get_public_calculator;
mod list_calculators;

pub use create_calculator::{CreateCalculatorCommand, CreateCalculatorHandler};
pub use delete_calculator::{DeleteCalculatorCommand, DeleteCalculatorHandler};
pub use get_public_calculator::{
    GetPublicCalculatorHandler, GetPublicCalculatorQuery, PublicCalculatorView,
};
pub use list_calculators::ListCalculatorsHandler;
