//! HTTP handlers for pricing endpoints.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::adapters::http::error::{json_rejection, ErrorResponse};
use crate::application::handlers::pricing::{
    ComputeDistanceCommand, ComputeDistanceHandler, ComputeError, ComputeLayeredCommand,
    ComputeLayeredHandler, ComputeMortgageCommand, ComputeMortgageHandler,
};

use super::dto::{
    DistanceCalcRequest, DistanceCalcResponse, LayeredCalcRequest, LayeredCalcResponse,
    MortgageCalcRequest, MortgageCalcResponse,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct PricingAppState {
    layered: Arc<ComputeLayeredHandler>,
    distance: Arc<ComputeDistanceHandler>,
    mortgage: Arc<ComputeMortgageHandler>,
    verbose_errors: bool,
}

impl PricingAppState {
    pub fn new(
        layered: Arc<ComputeLayeredHandler>,
        distance: Arc<ComputeDistanceHandler>,
        mortgage: Arc<ComputeMortgageHandler>,
        verbose_errors: bool,
    ) -> Self {
        Self {
            layered,
            distance,
            mortgage,
            verbose_errors,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/layers/calc
pub async fn calc_layered(
    State(state): State<PricingAppState>,
    body: Result<Json<LayeredCalcRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match body {
        Ok(body) => body,
        Err(rejection) => return json_rejection(rejection),
    };

    let cmd = ComputeLayeredCommand {
        calculator_id: req.calculator_id,
        selected: req.selected,
    };

    match state.layered.handle(cmd).await {
        Ok(quote) => (StatusCode::OK, Json(LayeredCalcResponse::from(quote))).into_response(),
        Err(e) => handle_compute_error(e, state.verbose_errors),
    }
}

/// POST /api/distance/calc
pub async fn calc_distance(
    State(state): State<PricingAppState>,
    body: Result<Json<DistanceCalcRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match body {
        Ok(body) => body,
        Err(rejection) => return json_rejection(rejection),
    };

    let cmd = ComputeDistanceCommand {
        request: req.to_domain(),
        calculator_id: req.calculator_id,
    };

    match state.distance.handle(cmd).await {
        Ok(outcome) => (StatusCode::OK, Json(DistanceCalcResponse::from(outcome))).into_response(),
        Err(e) => handle_compute_error(e, state.verbose_errors),
    }
}

/// POST /api/mortgage/calc
pub async fn calc_mortgage(
    State(state): State<PricingAppState>,
    body: Result<Json<MortgageCalcRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match body {
        Ok(body) => body,
        Err(rejection) => return json_rejection(rejection),
    };

    let cmd = ComputeMortgageCommand {
        input: req.to_domain(),
        calculator_id: req.calculator_id,
    };

    match state.mortgage.handle(cmd).await {
        Ok(quote) => (StatusCode::OK, Json(MortgageCalcResponse::from(quote))).into_response(),
        Err(e) => handle_compute_error(e, state.verbose_errors),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_compute_error(error: ComputeError, verbose: bool) -> Response {
    match error {
        ComputeError::Pricing(err) => {
            tracing::debug!(error = %err, "Pricing request rejected");
            ErrorResponse::new(err.code(), err.to_string()).into_response_with(StatusCode::BAD_REQUEST)
        }
        ComputeError::Infrastructure(msg) => ErrorResponse::persistence(&msg, verbose)
            .into_response_with(StatusCode::INTERNAL_SERVER_ERROR),
    }
}
