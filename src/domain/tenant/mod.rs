//! Tenant account as seen by the calculator service.

use serde::Serialize;

use crate::domain::foundation::{PlanId, Role, Timestamp, UserId};

/// Account record. Read-only here except for the notification chat id.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tenant {
    pub id: UserId,
    pub email: String,
    pub name: String,
    pub role: Role,
    pub plan_id: Option<PlanId>,
    pub plan_active: bool,
    pub created_at: Timestamp,
    /// Bot chat receiving computation notifications.
    pub telegram_chat_id: Option<String>,
}

impl Tenant {
    /// Normalizes a chat id: trimmed, with blank meaning "no chat".
    pub fn normalize_chat_id(raw: &str) -> Option<String> {
        let trimmed = raw.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    }
}
