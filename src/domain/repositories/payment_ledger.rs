use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;

use crate::domain::entities::payments::{NewPaymentEntity, PaymentEntity};

/// Append-only log of payment attempts. Entries are immutable once recorded
/// and every query preserves insertion order.
#[automock]
#[async_trait]
pub trait PaymentLedger {
    async fn record(&self, new_payment: NewPaymentEntity) -> Result<PaymentEntity>;

    async fn list(&self) -> Result<Vec<PaymentEntity>>;

    async fn find_by_movie(&self, movie_id: i64) -> Result<Vec<PaymentEntity>>;

    async fn find_by_user(&self, user_id: &str) -> Result<Vec<PaymentEntity>>;
}
