//! HTTP handlers for public widget links.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::adapters::http::calculators::{handle_calculator_error, CalculatorResponse};
use crate::application::handlers::calculator::{
    GetPublicCalculatorHandler, GetPublicCalculatorQuery, PublicCalculatorView,
};
use crate::domain::calculator::CalculatorConfig;

#[derive(Clone)]
pub struct PublicAppState {
    lookup: Arc<GetPublicCalculatorHandler>,
    verbose_errors: bool,
}

impl PublicAppState {
    pub fn new(lookup: Arc<GetPublicCalculatorHandler>, verbose_errors: bool) -> Self {
        Self {
            lookup,
            verbose_errors,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PublicCalculatorResponse {
    pub calculator: CalculatorResponse,
    /// Config document, `null` for unconfigurable types.
    pub config: Option<serde_json::Value>,
}

impl From<PublicCalculatorView> for PublicCalculatorResponse {
    fn from(view: PublicCalculatorView) -> Self {
        let config = view.config.and_then(|config| {
            match config {
                CalculatorConfig::Layered(c) => serde_json::to_value(c),
                CalculatorConfig::Distance(c) => serde_json::to_value(c),
            }
            .ok()
        });
        Self {
            calculator: view.calculator.into(),
            config,
        }
    }
}

/// GET /api/public/:owner_id/:token
pub async fn get_public_calculator(
    State(state): State<PublicAppState>,
    Path((owner_id, token)): Path<(String, String)>,
) -> Response {
    let query = GetPublicCalculatorQuery { owner_id, token };

    match state.lookup.handle(query).await {
        Ok(view) => (StatusCode::OK, Json(PublicCalculatorResponse::from(view))).into_response(),
        Err(e) => handle_calculator_error(e, state.verbose_errors),
    }
}
