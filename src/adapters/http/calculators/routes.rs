//! Route configuration for calculator management.

use axum::routing::{delete, get};
use axum::Router;

use super::handlers::{create_calculator, delete_calculator, list_calculators, CalculatorsAppState};

/// Routes:
/// - `GET /api/calculators` - Calculators visible to the caller
/// - `POST /api/calculators` - Create a calculator
/// - `DELETE /api/calculators/:id` - Delete a calculator
pub fn calculators_router() -> Router<CalculatorsAppState> {
    Router::new()
        .route("/api/calculators", get(list_calculators).post(create_calculator))
        .route("/api/calculators/:id", delete(delete_calculator))
}
