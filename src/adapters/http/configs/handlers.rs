//! HTTP handlers for configuration endpoints.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::adapters::http::calculators::handle_calculator_error;
use crate::adapters::http::error::{json_rejection, ErrorResponse};
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::config::{
    GetConfigHandler, GetConfigQuery, UpdateConfigCommand, UpdateConfigHandler,
};
use crate::domain::calculator::{CalculatorConfig, CalculatorType};
use crate::domain::foundation::{AuthenticatedUser, CalculatorId};
use crate::domain::pricing::{DistanceConfig, LayeredConfig};

#[derive(Clone)]
pub struct ConfigsAppState {
    get: Arc<GetConfigHandler>,
    update: Arc<UpdateConfigHandler>,
    verbose_errors: bool,
}

impl ConfigsAppState {
    pub fn new(get: Arc<GetConfigHandler>, update: Arc<UpdateConfigHandler>, verbose_errors: bool) -> Self {
        Self {
            get,
            update,
            verbose_errors,
        }
    }

    async fn read(&self, user: AuthenticatedUser, raw_id: String, calculator_type: CalculatorType) -> Response {
        let calculator_id = match parse_id(raw_id) {
            Ok(id) => id,
            Err(response) => return response,
        };
        let query = GetConfigQuery {
            user,
            calculator_id,
            calculator_type,
        };
        match self.get.handle(query).await {
            Ok(config) => config_response(config),
            Err(e) => handle_calculator_error(e, self.verbose_errors),
        }
    }

    async fn write(&self, user: AuthenticatedUser, raw_id: String, config: CalculatorConfig) -> Response {
        let calculator_id = match parse_id(raw_id) {
            Ok(id) => id,
            Err(response) => return response,
        };
        let cmd = UpdateConfigCommand {
            user,
            calculator_id,
            config,
        };
        match self.update.handle(cmd).await {
            Ok(config) => config_response(config),
            Err(e) => handle_calculator_error(e, self.verbose_errors),
        }
    }
}

fn parse_id(raw: String) -> Result<CalculatorId, Response> {
    CalculatorId::new(raw.trim()).map_err(|_| {
        ErrorResponse::bad_request("Invalid calculator ID").into_response_with(StatusCode::BAD_REQUEST)
    })
}

fn config_response(config: CalculatorConfig) -> Response {
    match config {
        CalculatorConfig::Layered(config) => (StatusCode::OK, Json(config)).into_response(),
        CalculatorConfig::Distance(config) => (StatusCode::OK, Json(config)).into_response(),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/layers/config/:id
pub async fn get_layered_config(
    State(state): State<ConfigsAppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<String>,
) -> Response {
    state.read(user, id, CalculatorType::Layered).await
}

/// PUT /api/layers/config/:id
pub async fn put_layered_config(
    State(state): State<ConfigsAppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<String>,
    body: Result<Json<LayeredConfig>, JsonRejection>,
) -> Response {
    match body {
        Ok(Json(config)) => state.write(user, id, CalculatorConfig::Layered(config)).await,
        Err(rejection) => json_rejection(rejection),
    }
}

/// GET /api/distance/config/:id
pub async fn get_distance_config(
    State(state): State<ConfigsAppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<String>,
) -> Response {
    state.read(user, id, CalculatorType::Distance).await
}

/// PUT /api/distance/config/:id
pub async fn put_distance_config(
    State(state): State<ConfigsAppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<String>,
    body: Result<Json<DistanceConfig>, JsonRejection>,
) -> Response {
    match body {
        Ok(Json(config)) => state.write(user, id, CalculatorConfig::Distance(config)).await,
        Err(rejection) => json_rejection(rejection),
    }
}
