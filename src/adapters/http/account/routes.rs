//! Route configuration for account endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{change_plan, get_me, list_plans, set_telegram_chat, AccountAppState};

/// Routes:
/// - `GET /api/me` - Account overview with usage
/// - `POST /api/me/telegram` - Bind or clear the notification chat
/// - `POST /api/me/plan` - Switch to another catalog plan
/// - `GET /api/plans` - Plan catalog
pub fn account_router() -> Router<AccountAppState> {
    Router::new()
        .route("/api/me", get(get_me))
        .route("/api/me/telegram", post(set_telegram_chat))
        .route("/api/me/plan", post(change_plan))
        .route("/api/plans", get(list_plans))
}
