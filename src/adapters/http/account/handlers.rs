//! HTTP handlers for account endpoints.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::adapters::http::error::{json_rejection, ErrorResponse};
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::account::{
    AccountError, ChangePlanCommand, ChangePlanHandler, GetOverviewHandler, ListPlansHandler,
    SetTelegramChatCommand, SetTelegramChatHandler,
};

use super::dto::{AccountResponse, ChangePlanRequest, SetTelegramChatRequest};

#[derive(Clone)]
pub struct AccountAppState {
    overview: Arc<GetOverviewHandler>,
    plans: Arc<ListPlansHandler>,
    telegram: Arc<SetTelegramChatHandler>,
    plan_change: Arc<ChangePlanHandler>,
    verbose_errors: bool,
}

impl AccountAppState {
    pub fn new(
        overview: Arc<GetOverviewHandler>,
        plans: Arc<ListPlansHandler>,
        telegram: Arc<SetTelegramChatHandler>,
        plan_change: Arc<ChangePlanHandler>,
        verbose_errors: bool,
    ) -> Self {
        Self {
            overview,
            plans,
            telegram,
            plan_change,
            verbose_errors,
        }
    }
}

/// GET /api/me
pub async fn get_me(State(state): State<AccountAppState>, RequireAuth(user): RequireAuth) -> Response {
    match state.overview.handle(&user).await {
        Ok(overview) => (StatusCode::OK, Json(AccountResponse::from(overview))).into_response(),
        Err(e) => handle_account_error(e, state.verbose_errors),
    }
}

/// POST /api/me/telegram
pub async fn set_telegram_chat(
    State(state): State<AccountAppState>,
    RequireAuth(user): RequireAuth,
    body: Result<Json<SetTelegramChatRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match body {
        Ok(body) => body,
        Err(rejection) => return json_rejection(rejection),
    };

    let cmd = SetTelegramChatCommand {
        user,
        chat_id: req.chat_id,
    };

    match state.telegram.handle(cmd).await {
        Ok(overview) => (StatusCode::OK, Json(AccountResponse::from(overview))).into_response(),
        Err(e) => handle_account_error(e, state.verbose_errors),
    }
}

/// POST /api/me/plan
pub async fn change_plan(
    State(state): State<AccountAppState>,
    RequireAuth(user): RequireAuth,
    body: Result<Json<ChangePlanRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match body {
        Ok(body) => body,
        Err(rejection) => return json_rejection(rejection),
    };

    let cmd = ChangePlanCommand {
        user,
        plan_id: req.plan_id,
    };

    match state.plan_change.handle(cmd).await {
        Ok(overview) => (StatusCode::OK, Json(AccountResponse::from(overview))).into_response(),
        Err(e) => handle_account_error(e, state.verbose_errors),
    }
}

/// GET /api/plans - Bare array, no authentication needed.
pub async fn list_plans(State(state): State<AccountAppState>) -> Response {
    (StatusCode::OK, Json(state.plans.handle().await)).into_response()
}

fn handle_account_error(error: AccountError, verbose: bool) -> Response {
    match error {
        AccountError::TenantNotFound(_) => ErrorResponse::new(error.code(), error.to_string())
            .into_response_with(StatusCode::NOT_FOUND),
        AccountError::Validation(_) | AccountError::UnknownPlan(_) => {
            ErrorResponse::new(error.code(), error.to_string())
                .into_response_with(StatusCode::BAD_REQUEST)
        }
        AccountError::Infrastructure(msg) => ErrorResponse::persistence(&msg, verbose)
            .into_response_with(StatusCode::INTERNAL_SERVER_ERROR),
    }
}
