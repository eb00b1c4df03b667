//! SetTelegramChatHandler - Binds the tenant's notification chat.

use std::sync::Arc;

use crate::domain::foundation::AuthenticatedUser;
use crate::domain::tenant::Tenant;
use crate::ports::TenantDirectory;

use super::{AccountError, AccountOverview, GetOverviewHandler};

#[derive(Debug, Clone)]
pub struct SetTelegramChatCommand {
    pub user: AuthenticatedUser,
    /// Blank clears the binding.
    pub chat_id: String,
}

pub struct SetTelegramChatHandler {
    tenants: Arc<dyn TenantDirectory>,
    overview: Arc<GetOverviewHandler>,
}

impl SetTelegramChatHandler {
    pub fn new(tenants: Arc<dyn TenantDirectory>, overview: Arc<GetOverviewHandler>) -> Self {
        Self { tenants, overview }
    }

    /// Returns the refreshed overview.
    pub async fn handle(&self, cmd: SetTelegramChatCommand) -> Result<AccountOverview, AccountError> {
        let chat_id = Tenant::normalize_chat_id(&cmd.chat_id);

        let updated = self
            .tenants
            .set_telegram_chat_id(&cmd.user.id, chat_id.as_deref())
            .await?;
        if !updated {
            return Err(AccountError::TenantNotFound(cmd.user.id));
        }

        tracing::info!(user_id = %cmd.user.id, bound = chat_id.is_some(), "Notification chat updated");

        self.overview.handle(&cmd.user).await
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::tenant;
    use super::super::{ListPlansHandler, UsageReporter};
    use super::*;
    use crate::adapters::memory::{
        InMemoryCalculatorRepository, InMemoryLeadCounter, InMemoryPlanRepository,
        InMemoryTenantDirectory,
    };
    use crate::domain::foundation::{Role, UserId};

    async fn handler() -> (SetTelegramChatHandler, InMemoryTenantDirectory) {
        let calculators = InMemoryCalculatorRepository::new();
        let tenants = InMemoryTenantDirectory::new(calculators.clone());
        tenants.insert(tenant("alice", Some("basic"))).await;
        let overview = GetOverviewHandler::new(
            Arc::new(tenants.clone()),
            Arc::new(ListPlansHandler::new(Arc::new(InMemoryPlanRepository::new()))),
            UsageReporter::new(Arc::new(calculators), Arc::new(InMemoryLeadCounter::new())),
        );
        (
            SetTelegramChatHandler::new(Arc::new(tenants.clone()), Arc::new(overview)),
            tenants,
        )
    }

    fn cmd(user: &str, chat_id: &str) -> SetTelegramChatCommand {
        SetTelegramChatCommand {
            user: AuthenticatedUser::new(UserId::new(user).unwrap(), Role::User),
            chat_id: chat_id.to_string(),
        }
    }

    #[tokio::test]
    async fn stores_trimmed_chat_id() {
        let (handler, _) = handler().await;

        let overview = handler.handle(cmd("alice", "  123456 ")).await.unwrap();

        assert_eq!(overview.tenant.telegram_chat_id.as_deref(), Some("123456"));
    }

    #[tokio::test]
    async fn blank_chat_id_clears_binding() {
        let (handler, tenants) = handler().await;
        handler.handle(cmd("alice", "42")).await.unwrap();

        handler.handle(cmd("alice", "   ")).await.unwrap();

        let stored = tenants.find(&UserId::new("alice").unwrap()).await.unwrap().unwrap();
        assert_eq!(stored.telegram_chat_id, None);
    }

    #[tokio::test]
    async fn unknown_tenant_is_an_error() {
        let (handler, _) = handler().await;
        assert!(matches!(
            handler.handle(cmd("ghost", "1")).await,
            Err(AccountError::TenantNotFound(_))
        ));
    }
}
