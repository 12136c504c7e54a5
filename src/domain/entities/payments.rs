use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::value_objects::enums::payment_statuses::PaymentStatus;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaymentEntity {
    pub id: Uuid,
    pub movie_id: i64,
    pub user_id: String,
    pub amount: f64,
    pub status: PaymentStatus,
    pub movie_title: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewPaymentEntity {
    pub movie_id: i64,
    pub user_id: String,
    pub amount: f64,
    pub status: PaymentStatus,
    pub movie_title: String,
}

impl PaymentEntity {
    /// Stamps a new ledger entry with its identity and creation instant.
    /// Entries are immutable once recorded.
    pub fn record_now(new_payment: NewPaymentEntity) -> Self {
        Self {
            id: Uuid::new_v4(),
            movie_id: new_payment.movie_id,
            user_id: new_payment.user_id,
            amount: new_payment.amount,
            status: new_payment.status,
            movie_title: new_payment.movie_title,
            created_at: Utc::now(),
        }
    }
}
