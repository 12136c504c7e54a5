use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::entities::payments::{NewPaymentEntity, PaymentEntity};
use crate::domain::repositories::payment_ledger::PaymentLedger;

/// Process-lifetime ledger. Append-only: entries are stamped on the way in
/// and never touched again, and every read preserves insertion order.
#[derive(Default)]
pub struct InMemoryPaymentLedger {
    entries: RwLock<Vec<PaymentEntity>>,
}

impl InMemoryPaymentLedger {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PaymentLedger for InMemoryPaymentLedger {
    async fn record(&self, new_payment: NewPaymentEntity) -> Result<PaymentEntity> {
        let entry = PaymentEntity::record_now(new_payment);
        let mut entries = self.entries.write().await;
        entries.push(entry.clone());
        Ok(entry)
    }

    async fn list(&self) -> Result<Vec<PaymentEntity>> {
        Ok(self.entries.read().await.clone())
    }

    async fn find_by_movie(&self, movie_id: i64) -> Result<Vec<PaymentEntity>> {
        Ok(self
            .entries
            .read()
            .await
            .iter()
            .filter(|entry| entry.movie_id == movie_id)
            .cloned()
            .collect())
    }

    async fn find_by_user(&self, user_id: &str) -> Result<Vec<PaymentEntity>> {
        Ok(self
            .entries
            .read()
            .await
            .iter()
            .filter(|entry| entry.user_id == user_id)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::enums::payment_statuses::PaymentStatus;

    fn sample_new_payment(movie_id: i64, amount: f64) -> NewPaymentEntity {
        NewPaymentEntity {
            movie_id,
            user_id: "user123".to_string(),
            amount,
            status: PaymentStatus::Completed,
            movie_title: "Test".to_string(),
        }
    }

    #[tokio::test]
    async fn record_then_query_by_movie_returns_the_entry() {
        let ledger = InMemoryPaymentLedger::new();
        assert!(ledger.list().await.unwrap().is_empty());

        ledger.record(sample_new_payment(42, 12.99)).await.unwrap();

        let by_movie = ledger.find_by_movie(42).await.unwrap();
        assert_eq!(by_movie.len(), 1);
        assert_eq!(by_movie[0].amount, 12.99);
        assert_eq!(by_movie[0].status, PaymentStatus::Completed);

        assert!(ledger.find_by_movie(7).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn record_assigns_a_fresh_id_and_timestamp() {
        let ledger = InMemoryPaymentLedger::new();

        let first = ledger.record(sample_new_payment(1, 10.0)).await.unwrap();
        let second = ledger.record(sample_new_payment(1, 20.0)).await.unwrap();

        assert_ne!(first.id, second.id);
        assert!(first.created_at <= second.created_at);
    }

    #[tokio::test]
    async fn queries_preserve_insertion_order() {
        let ledger = InMemoryPaymentLedger::new();
        for amount in [1.0, 2.0, 3.0] {
            ledger.record(sample_new_payment(9, amount)).await.unwrap();
        }

        let amounts: Vec<f64> = ledger
            .find_by_user("user123")
            .await
            .unwrap()
            .iter()
            .map(|entry| entry.amount)
            .collect();

        assert_eq!(amounts, vec![1.0, 2.0, 3.0]);
    }
}
