use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::domain::entities::payments::PaymentEntity;
use crate::domain::value_objects::enums::{
    date_windows::DateWindow, payment_status_filters::PaymentStatusFilter,
    payment_statuses::PaymentStatus, sort_orders::SortOrder,
};
use crate::domain::value_objects::sorting::SortKey;

/// Single actor in this console; both checkout and publish record against it.
pub const DEFAULT_USER_ID: &str = "user123";

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PaymentModel {
    pub id: Uuid,
    pub movie_id: i64,
    pub user_id: String,
    pub amount: f64,
    pub status: PaymentStatus,
    pub movie_title: String,
    pub timestamp: DateTime<Utc>,
}

impl From<PaymentEntity> for PaymentModel {
    fn from(payment: PaymentEntity) -> Self {
        Self {
            id: payment.id,
            movie_id: payment.movie_id,
            user_id: payment.user_id,
            amount: payment.amount,
            status: payment.status,
            movie_title: payment.movie_title,
            timestamp: payment.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PaymentListFilter {
    pub status: PaymentStatusFilter,
    pub search: Option<String>,
    pub date_window: DateWindow,
    pub sort_by: SortKey,
}

impl Default for PaymentListFilter {
    fn default() -> Self {
        Self {
            status: PaymentStatusFilter::All,
            search: None,
            date_window: DateWindow::All,
            sort_by: SortKey::new("timestamp", SortOrder::Desc),
        }
    }
}

/// Derived aggregates over a status-filtered ledger view. Recomputed on
/// every call; nothing here is cached.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LedgerStats {
    pub total: f64,
    pub completed: f64,
    pub pending: f64,
    pub failed: f64,
    pub completed_count: usize,
    pub pending_count: usize,
    pub failed_count: usize,
    pub total_count: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CsvExport {
    pub filename: String,
    pub content: String,
}
