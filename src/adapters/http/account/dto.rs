//! HTTP DTOs for account endpoints.

use serde::{Deserialize, Serialize};

use crate::application::handlers::account::AccountOverview;
use crate::domain::foundation::{Role, Timestamp};
use crate::domain::plan::Plan;
use crate::domain::tenant::Tenant;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetTelegramChatRequest {
    #[serde(default)]
    pub chat_id: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePlanRequest {
    #[serde(default)]
    pub plan_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan_id: Option<String>,
    pub created_at: Timestamp,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telegram_chat_id: Option<String>,
}

impl From<Tenant> for UserResponse {
    fn from(tenant: Tenant) -> Self {
        Self {
            id: tenant.id.to_string(),
            email: tenant.email,
            name: tenant.name,
            role: tenant.role,
            plan_id: tenant.plan_id.map(|id| id.as_str().to_string()),
            created_at: tenant.created_at,
            telegram_chat_id: tenant.telegram_chat_id,
        }
    }
}

/// `GET /api/me` body.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountResponse {
    pub user: UserResponse,
    pub plan: Option<Plan>,
    pub plans: Vec<Plan>,
    pub plan_active: bool,
    pub leads_used: u64,
    pub calcs_used: u64,
}

impl From<AccountOverview> for AccountResponse {
    fn from(overview: AccountOverview) -> Self {
        Self {
            plan_active: overview.tenant.plan_active,
            user: overview.tenant.into(),
            plan: overview.plan,
            plans: overview.plans,
            leads_used: overview.usage.leads_used,
            calcs_used: overview.usage.calcs_used,
        }
    }
}
