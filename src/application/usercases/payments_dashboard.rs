use std::sync::Arc;

use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use tracing::info;

use crate::domain::entities::payments::PaymentEntity;
use crate::domain::repositories::payment_ledger::PaymentLedger;
use crate::domain::value_objects::enums::payment_status_filters::PaymentStatusFilter;
use crate::domain::value_objects::enums::payment_statuses::PaymentStatus;
use crate::domain::value_objects::payments::{
    CsvExport, LedgerStats, PaymentListFilter, PaymentModel,
};
use crate::domain::value_objects::sorting::SortKey;

const CSV_HEADER: &str = "Date,User ID,Movie,Amount,Status";

/// Read-side views over the payment ledger: filtering, sorting, derived
/// aggregates and CSV export. Everything is recomputed from the ledger on
/// each call; the ledger stays small and append-only.
pub struct PaymentsDashboardUseCase<L>
where
    L: PaymentLedger + Send + Sync + 'static,
{
    ledger: Arc<L>,
}

impl<L> PaymentsDashboardUseCase<L>
where
    L: PaymentLedger + Send + Sync + 'static,
{
    pub fn new(ledger: Arc<L>) -> Self {
        Self { ledger }
    }

    pub async fn list(&self, filter: &PaymentListFilter) -> Result<Vec<PaymentModel>> {
        let entries = self.ledger.list().await?;
        let view = apply_filter(entries, filter, Utc::now());
        Ok(view.into_iter().map(PaymentModel::from).collect())
    }

    /// Aggregates over the status-filtered view. Search and date filters do
    /// not narrow the stats; they are list-only refinements.
    pub async fn stats(&self, status: PaymentStatusFilter) -> Result<LedgerStats> {
        let entries = self.ledger.list().await?;
        Ok(compute_stats(
            entries
                .into_iter()
                .filter(|entry| status.matches(entry.status)),
        ))
    }

    pub async fn export(&self, filter: &PaymentListFilter) -> Result<CsvExport> {
        let entries = self.ledger.list().await?;
        let view = apply_filter(entries, filter, Utc::now());
        let export = render_csv(&view, Utc::now().date_naive());
        info!(rows = view.len(), filename = %export.filename, "payments: exported csv");
        Ok(export)
    }

    pub async fn payments_for_movie(&self, movie_id: i64) -> Result<Vec<PaymentModel>> {
        let entries = self.ledger.find_by_movie(movie_id).await?;
        Ok(entries.into_iter().map(PaymentModel::from).collect())
    }

    pub async fn payments_for_user(&self, user_id: &str) -> Result<Vec<PaymentModel>> {
        let entries = self.ledger.find_by_user(user_id).await?;
        Ok(entries.into_iter().map(PaymentModel::from).collect())
    }
}

/// Status, search and date refinements followed by the `field.order` sort.
/// The underlying sequence is never mutated; this builds a view.
fn apply_filter(
    entries: Vec<PaymentEntity>,
    filter: &PaymentListFilter,
    now: DateTime<Utc>,
) -> Vec<PaymentEntity> {
    let search = filter
        .search
        .as_deref()
        .map(str::trim)
        .filter(|needle| !needle.is_empty())
        .map(str::to_lowercase);
    let cutoff = filter.date_window.cutoff(now);

    let mut view: Vec<PaymentEntity> = entries
        .into_iter()
        .filter(|entry| filter.status.matches(entry.status))
        .filter(|entry| match &search {
            Some(needle) => {
                entry.user_id.to_lowercase().contains(needle)
                    || entry.movie_title.to_lowercase().contains(needle)
            }
            None => true,
        })
        .filter(|entry| match cutoff {
            Some(cutoff) => entry.created_at >= cutoff,
            None => true,
        })
        .collect();

    sort_payments(&mut view, &filter.sort_by);
    view
}

/// Sorts a view by a `field.order` key. `timestamp` compares as calendar
/// time; ties break arbitrarily and unknown fields leave the view as-is.
fn sort_payments(entries: &mut [PaymentEntity], sort_by: &SortKey) {
    match sort_by.field.as_str() {
        "timestamp" => {
            entries.sort_unstable_by(|a, b| sort_by.order.apply(a.created_at.cmp(&b.created_at)))
        }
        "amount" => {
            entries.sort_unstable_by(|a, b| sort_by.order.apply(a.amount.total_cmp(&b.amount)))
        }
        "status" => entries
            .sort_unstable_by(|a, b| sort_by.order.apply(a.status.as_str().cmp(b.status.as_str()))),
        "movie_title" => entries
            .sort_unstable_by(|a, b| sort_by.order.apply(a.movie_title.cmp(&b.movie_title))),
        "user_id" => {
            entries.sort_unstable_by(|a, b| sort_by.order.apply(a.user_id.cmp(&b.user_id)))
        }
        _ => {}
    }
}

fn compute_stats(entries: impl Iterator<Item = PaymentEntity>) -> LedgerStats {
    let mut stats = LedgerStats {
        total: 0.0,
        completed: 0.0,
        pending: 0.0,
        failed: 0.0,
        completed_count: 0,
        pending_count: 0,
        failed_count: 0,
        total_count: 0,
    };

    for entry in entries {
        stats.total += entry.amount;
        stats.total_count += 1;
        match entry.status {
            PaymentStatus::Completed => {
                stats.completed += entry.amount;
                stats.completed_count += 1;
            }
            PaymentStatus::Pending => {
                stats.pending += entry.amount;
                stats.pending_count += 1;
            }
            PaymentStatus::Failed => {
                stats.failed += entry.amount;
                stats.failed_count += 1;
            }
        }
    }

    stats
}

/// Fixed five-column CSV. Fields are not escaped; every source field is
/// either generated or a catalog title, none of which carry the delimiter
/// in practice.
fn render_csv(entries: &[PaymentEntity], exported_on: NaiveDate) -> CsvExport {
    let mut lines = Vec::with_capacity(entries.len() + 1);
    lines.push(CSV_HEADER.to_string());

    for entry in entries {
        let movie = if entry.movie_title.is_empty() {
            "N/A"
        } else {
            entry.movie_title.as_str()
        };
        lines.push(format!(
            "{},{},{},{:.2},{}",
            entry.created_at.format("%Y-%m-%d %H:%M:%S"),
            entry.user_id,
            movie,
            entry.amount,
            entry.status
        ));
    }

    CsvExport {
        filename: format!("payments-{}.csv", exported_on.format("%Y-%m-%d")),
        content: lines.join("\n"),
    }
}
