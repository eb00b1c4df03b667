//! Tenant account handlers.

mod change_plan;
mod errors;
mod get_overview;
mod list_plans;
mod set_telegram_chat;
mod usage_reporter;

pub use change_plan::{ChangePlanCommand, ChangePlanHandler};
pub use errors::AccountError;
pub use get_overview::{AccountOverview, GetOverviewHandler};
pub use list_plans::ListPlansHandler;
pub use set_telegram_chat::{SetTelegramChatCommand, SetTelegramChatHandler};
pub use usage_reporter::UsageReporter;
