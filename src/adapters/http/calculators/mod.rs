//! HTTP adapter for calculator management.

mod dto;
mod handlers;
mod routes;

pub use dto::{CalculatorListResponse, CalculatorResponse, CreateCalculatorRequest};
pub use handlers::CalculatorsAppState;
pub(crate) use handlers::handle_calculator_error;
pub use routes::calculators_router;
