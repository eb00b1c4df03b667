//! HTTP handlers for calculator management.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::adapters::http::error::{json_rejection, ErrorResponse};
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::calculator::{
    CreateCalculatorCommand, CreateCalculatorHandler, DeleteCalculatorCommand,
    DeleteCalculatorHandler, ListCalculatorsHandler,
};
use crate::domain::calculator::CalculatorError;
use crate::domain::foundation::CalculatorId;

use super::dto::{CalculatorListResponse, CalculatorResponse, CreateCalculatorRequest};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct CalculatorsAppState {
    create: Arc<CreateCalculatorHandler>,
    list: Arc<ListCalculatorsHandler>,
    delete: Arc<DeleteCalculatorHandler>,
    verbose_errors: bool,
}

impl CalculatorsAppState {
    pub fn new(
        create: Arc<CreateCalculatorHandler>,
        list: Arc<ListCalculatorsHandler>,
        delete: Arc<DeleteCalculatorHandler>,
        verbose_errors: bool,
    ) -> Self {
        Self {
            create,
            list,
            delete,
            verbose_errors,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/calculators
pub async fn list_calculators(
    State(state): State<CalculatorsAppState>,
    RequireAuth(user): RequireAuth,
) -> Response {
    match state.list.handle(&user).await {
        Ok(calculators) => {
            (StatusCode::OK, Json(CalculatorListResponse::from(calculators))).into_response()
        }
        Err(e) => handle_calculator_error(e, state.verbose_errors),
    }
}

/// POST /api/calculators
pub async fn create_calculator(
    State(state): State<CalculatorsAppState>,
    RequireAuth(user): RequireAuth,
    body: Result<Json<CreateCalculatorRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match body {
        Ok(body) => body,
        Err(rejection) => return json_rejection(rejection),
    };

    let cmd = CreateCalculatorCommand {
        user,
        name: req.name,
        calculator_type: req.calculator_type,
    };

    match state.create.handle(cmd).await {
        Ok(calc) => (StatusCode::CREATED, Json(CalculatorResponse::from(calc))).into_response(),
        Err(e) => handle_calculator_error(e, state.verbose_errors),
    }
}

/// DELETE /api/calculators/:id
pub async fn delete_calculator(
    State(state): State<CalculatorsAppState>,
    RequireAuth(user): RequireAuth,
    Path(calculator_id): Path<String>,
) -> Response {
    let calculator_id = match calculator_id.parse::<CalculatorId>() {
        Ok(id) => id,
        Err(_) => {
            return ErrorResponse::bad_request("Invalid calculator ID")
                .into_response_with(StatusCode::BAD_REQUEST)
        }
    };

    let cmd = DeleteCalculatorCommand {
        user,
        calculator_id,
    };

    match state.delete.handle(cmd).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => handle_calculator_error(e, state.verbose_errors),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

/// Maps management errors for this module and the config and public ones.
pub(crate) fn handle_calculator_error(error: CalculatorError, verbose: bool) -> Response {
    let status = match &error {
        CalculatorError::Validation(_) | CalculatorError::QuotaExceeded { .. } => {
            StatusCode::BAD_REQUEST
        }
        CalculatorError::NotFound(_) | CalculatorError::LinkNotFound => StatusCode::NOT_FOUND,
        CalculatorError::Forbidden => StatusCode::FORBIDDEN,
        CalculatorError::Infrastructure(msg) => {
            return ErrorResponse::persistence(msg, verbose)
                .into_response_with(StatusCode::INTERNAL_SERVER_ERROR)
        }
    };

    match error {
        // Quota fields sit at the top level of the body
        CalculatorError::QuotaExceeded { limit, current } => (
            status,
            Json(serde_json::json!({
                "code": error.code().to_string(),
                "message": error.message(),
                "limit": limit,
                "current": current,
            })),
        )
            .into_response(),
        CalculatorError::Validation(ref err) => {
            ErrorResponse::new(error.code(), error.message())
                .with_details(serde_json::json!({ "field": err.field() }))
                .into_response_with(status)
        }
        _ => ErrorResponse::new(error.code(), error.message()).into_response_with(status),
    }
}
