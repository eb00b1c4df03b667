//! DeleteCalculatorHandler - Removes a calculator.

use std::sync::Arc;

use crate::domain::calculator::CalculatorError;
use crate::domain::foundation::{AuthenticatedUser, CalculatorId};
use crate::ports::CalculatorRepository;

#[derive(Debug, Clone)]
pub struct DeleteCalculatorCommand {
    pub user: AuthenticatedUser,
    pub calculator_id: CalculatorId,
}

pub struct DeleteCalculatorHandler {
    calculators: Arc<dyn CalculatorRepository>,
}

impl DeleteCalculatorHandler {
    pub fn new(calculators: Arc<dyn CalculatorRepository>) -> Self {
        Self { calculators }
    }

    /// A tenant deleting someone else's calculator gets `NotFound`, same as
    /// for an id that does not exist.
    pub async fn handle(&self, cmd: DeleteCalculatorCommand) -> Result<(), CalculatorError> {
        let owner = (!cmd.user.is_admin()).then_some(&cmd.user.id);
        let removed = self.calculators.delete(&cmd.calculator_id, owner).await?;
        if !removed {
            return Err(CalculatorError::not_found(cmd.calculator_id));
        }

        tracing::info!(calculator_id = %cmd.calculator_id, user_id = %cmd.user.id, "Calculator deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryCalculatorRepository;
    use crate::domain::calculator::{Calculator, CalculatorType};
    use crate::domain::foundation::{Role, UserId};

    async fn seeded() -> (InMemoryCalculatorRepository, Calculator) {
        let repo = InMemoryCalculatorRepository::new();
        let calc = Calculator::create("Calc", CalculatorType::Distance, UserId::new("alice").unwrap())
            .unwrap();
        repo.save(&calc).await.unwrap();
        (repo, calc)
    }

    fn user(id: &str, role: Role) -> AuthenticatedUser {
        AuthenticatedUser::new(UserId::new(id).unwrap(), role)
    }

    #[tokio::test]
    async fn owner_deletes_own_calculator() {
        let (repo, calc) = seeded().await;
        let handler = DeleteCalculatorHandler::new(Arc::new(repo.clone()));

        handler
            .handle(DeleteCalculatorCommand {
                user: user("alice", Role::User),
                calculator_id: calc.id,
            })
            .await
            .unwrap();

        assert!(repo.is_empty().await);
    }

    #[tokio::test]
    async fn foreign_calculator_is_not_found() {
        let (repo, calc) = seeded().await;
        let handler = DeleteCalculatorHandler::new(Arc::new(repo.clone()));

        let result = handler
            .handle(DeleteCalculatorCommand {
                user: user("bob", Role::User),
                calculator_id: calc.id,
            })
            .await;

        assert!(matches!(result, Err(CalculatorError::NotFound(_))));
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn admin_deletes_any_calculator() {
        let (repo, calc) = seeded().await;
        let handler = DeleteCalculatorHandler::new(Arc::new(repo.clone()));

        handler
            .handle(DeleteCalculatorCommand {
                user: user("root", Role::Admin),
                calculator_id: calc.id,
            })
            .await
            .unwrap();

        assert!(repo.is_empty().await);
    }
}
