//! In-memory calculator storage and usage counters.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::calculator::Calculator;
use crate::domain::foundation::{CalculatorId, DomainError, UserId};
use crate::ports::{CalculatorRepository, LimitedInsert, UsageMeter};

/// Calculators kept in insertion order. Also meters computations, since the
/// counter lives on the calculator record.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCalculatorRepository {
    calculators: Arc<RwLock<Vec<Calculator>>>,
}

impl InMemoryCalculatorRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.calculators.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.calculators.read().await.is_empty()
    }
}

fn newest_first(mut calculators: Vec<Calculator>) -> Vec<Calculator> {
    // Insertion order breaks created_at ties
    calculators.reverse();
    calculators.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    calculators
}

fn insert_unique(calculators: &mut Vec<Calculator>, calculator: &Calculator) -> Result<(), DomainError> {
    if calculators.iter().any(|c| c.id == calculator.id) {
        return Err(DomainError::database(format!(
            "Calculator {} already exists",
            calculator.id
        )));
    }
    calculators.push(calculator.clone());
    Ok(())
}

#[async_trait]
impl CalculatorRepository for InMemoryCalculatorRepository {
    async fn save(&self, calculator: &Calculator) -> Result<(), DomainError> {
        let mut calculators = self.calculators.write().await;
        insert_unique(&mut calculators, calculator)
    }

    async fn save_within_limit(
        &self,
        calculator: &Calculator,
        limit: u32,
    ) -> Result<LimitedInsert, DomainError> {
        // Counting under the write lock keeps check and insert atomic
        let mut calculators = self.calculators.write().await;
        let owned = calculators
            .iter()
            .filter(|c| c.owner_id == calculator.owner_id)
            .count();
        let current = u32::try_from(owned).unwrap_or(u32::MAX);
        if current >= limit {
            return Ok(LimitedInsert::Refused { current });
        }
        insert_unique(&mut calculators, calculator)?;
        Ok(LimitedInsert::Inserted)
    }

    async fn find_by_id(&self, id: &CalculatorId) -> Result<Option<Calculator>, DomainError> {
        let calculators = self.calculators.read().await;
        Ok(calculators.iter().find(|c| &c.id == id).cloned())
    }

    async fn find_by_public_link(
        &self,
        owner_id: &UserId,
        token: &str,
    ) -> Result<Option<Calculator>, DomainError> {
        let calculators = self.calculators.read().await;
        Ok(calculators
            .iter()
            .find(|c| &c.owner_id == owner_id && c.public_token.as_str() == token)
            .cloned())
    }

    async fn list_all(&self) -> Result<Vec<Calculator>, DomainError> {
        Ok(newest_first(self.calculators.read().await.clone()))
    }

    async fn list_by_owner(&self, owner_id: &UserId) -> Result<Vec<Calculator>, DomainError> {
        let owned = self
            .calculators
            .read()
            .await
            .iter()
            .filter(|c| &c.owner_id == owner_id)
            .cloned()
            .collect();
        Ok(newest_first(owned))
    }

    async fn count_by_owner(&self, owner_id: &UserId) -> Result<u32, DomainError> {
        let calculators = self.calculators.read().await;
        let count = calculators.iter().filter(|c| &c.owner_id == owner_id).count();
        Ok(u32::try_from(count).unwrap_or(u32::MAX))
    }

    async fn delete(
        &self,
        id: &CalculatorId,
        owner_id: Option<&UserId>,
    ) -> Result<bool, DomainError> {
        let mut calculators = self.calculators.write().await;
        let before = calculators.len();
        calculators.retain(|c| !(&c.id == id && owner_id.map_or(true, |o| &c.owner_id == o)));
        Ok(calculators.len() != before)
    }
}

#[async_trait]
impl UsageMeter for InMemoryCalculatorRepository {
    async fn record_computation(&self, calculator_id: &str) -> Result<(), DomainError> {
        if calculator_id.is_empty() {
            return Ok(());
        }
        let mut calculators = self.calculators.write().await;
        if let Some(calculator) = calculators.iter_mut().find(|c| c.id.as_str() == calculator_id) {
            calculator.calc_count += 1;
        }
        Ok(())
    }

    async fn calcs_used(&self, owner_id: &UserId) -> Result<u64, DomainError> {
        let calculators = self.calculators.read().await;
        Ok(calculators
            .iter()
            .filter(|c| &c.owner_id == owner_id)
            .map(|c| c.calc_count)
            .sum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::calculator::CalculatorType;
    use crate::domain::foundation::Timestamp;

    fn user(id: &str) -> UserId {
        UserId::new(id).unwrap()
    }

    fn calculator(name: &str, owner: &str) -> Calculator {
        Calculator::create(name, CalculatorType::Distance, user(owner)).unwrap()
    }

    #[tokio::test]
    async fn save_then_find() {
        let repo = InMemoryCalculatorRepository::new();
        let calc = calculator("Delivery", "u1");
        repo.save(&calc).await.unwrap();

        assert_eq!(repo.find_by_id(&calc.id).await.unwrap(), Some(calc.clone()));
        assert_eq!(
            repo.find_by_public_link(&user("u1"), calc.public_token.as_str())
                .await
                .unwrap(),
            Some(calc.clone())
        );
        assert_eq!(
            repo.find_by_public_link(&user("u2"), calc.public_token.as_str())
                .await
                .unwrap(),
            None
        );
    }

    #[tokio::test]
    async fn duplicate_save_is_rejected() {
        let repo = InMemoryCalculatorRepository::new();
        let calc = calculator("Delivery", "u1");
        repo.save(&calc).await.unwrap();
        assert!(repo.save(&calc).await.is_err());
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn save_within_limit_counts_only_the_owner() {
        let repo = InMemoryCalculatorRepository::new();
        repo.save(&calculator("Theirs", "u2")).await.unwrap();

        assert_eq!(
            repo.save_within_limit(&calculator("A", "u1"), 1).await.unwrap(),
            LimitedInsert::Inserted
        );
        assert_eq!(
            repo.save_within_limit(&calculator("B", "u1"), 1).await.unwrap(),
            LimitedInsert::Refused { current: 1 }
        );
        assert_eq!(repo.count_by_owner(&user("u1")).await.unwrap(), 1);
        assert_eq!(repo.len().await, 2);
    }

    #[tokio::test]
    async fn concurrent_limited_saves_never_exceed_limit() {
        let repo = InMemoryCalculatorRepository::new();
        let mut tasks = tokio::task::JoinSet::new();
        for i in 0..50 {
            let repo = repo.clone();
            tasks.spawn(async move {
                repo.save_within_limit(&calculator(&format!("C{}", i), "u1"), 2)
                    .await
                    .unwrap()
            });
        }

        let mut inserted = 0;
        while let Some(outcome) = tasks.join_next().await {
            if outcome.unwrap() == LimitedInsert::Inserted {
                inserted += 1;
            }
        }
        assert_eq!(inserted, 2);
        assert_eq!(repo.count_by_owner(&user("u1")).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn listings_are_newest_first() {
        let repo = InMemoryCalculatorRepository::new();
        let mut old = calculator("Old", "u1");
        old.created_at = Timestamp::now().plus_secs(-60);
        let new = calculator("New", "u1");
        let other = calculator("Other", "u2");
        repo.save(&old).await.unwrap();
        repo.save(&new).await.unwrap();
        repo.save(&other).await.unwrap();

        let mine: Vec<String> = repo
            .list_by_owner(&user("u1"))
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(mine, vec!["New", "Old"]);
        assert_eq!(repo.list_all().await.unwrap().len(), 3);
        assert_eq!(repo.count_by_owner(&user("u1")).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn delete_respects_owner_restriction() {
        let repo = InMemoryCalculatorRepository::new();
        let calc = calculator("Delivery", "u1");
        repo.save(&calc).await.unwrap();

        assert!(!repo.delete(&calc.id, Some(&user("u2"))).await.unwrap());
        assert!(repo.delete(&calc.id, Some(&user("u1"))).await.unwrap());
        assert!(!repo.delete(&calc.id, None).await.unwrap());
    }

    #[tokio::test]
    async fn record_computation_increments_and_aggregates() {
        let repo = InMemoryCalculatorRepository::new();
        let a = calculator("A", "u1");
        let b = calculator("B", "u1");
        repo.save(&a).await.unwrap();
        repo.save(&b).await.unwrap();

        repo.record_computation(a.id.as_str()).await.unwrap();
        repo.record_computation(a.id.as_str()).await.unwrap();
        repo.record_computation(b.id.as_str()).await.unwrap();

        assert_eq!(repo.find_by_id(&a.id).await.unwrap().unwrap().calc_count, 2);
        assert_eq!(repo.calcs_used(&user("u1")).await.unwrap(), 3);
        assert_eq!(repo.calcs_used(&user("u2")).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn empty_and_unknown_ids_are_no_ops() {
        let repo = InMemoryCalculatorRepository::new();
        let calc = calculator("A", "u1");
        repo.save(&calc).await.unwrap();

        repo.record_computation("").await.unwrap();
        repo.record_computation("calc_missing").await.unwrap();

        assert_eq!(repo.calcs_used(&user("u1")).await.unwrap(), 0);
    }
}
