use std::fmt::Display;

use serde::{Deserialize, Serialize};

use super::payment_statuses::PaymentStatus;

/// Status view over the payment ledger; `All` leaves the sequence untouched.
#[derive(Default, Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatusFilter {
    #[default]
    All,
    Pending,
    Completed,
    Failed,
}

impl PaymentStatusFilter {
    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "all" => Some(PaymentStatusFilter::All),
            "pending" => Some(PaymentStatusFilter::Pending),
            "completed" => Some(PaymentStatusFilter::Completed),
            "failed" => Some(PaymentStatusFilter::Failed),
            _ => None,
        }
    }

    pub fn matches(&self, status: PaymentStatus) -> bool {
        match self {
            PaymentStatusFilter::All => true,
            PaymentStatusFilter::Pending => status == PaymentStatus::Pending,
            PaymentStatusFilter::Completed => status == PaymentStatus::Completed,
            PaymentStatusFilter::Failed => status == PaymentStatus::Failed,
        }
    }
}

impl Display for PaymentStatusFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let filter = match self {
            PaymentStatusFilter::All => "all",
            PaymentStatusFilter::Pending => "pending",
            PaymentStatusFilter::Completed => "completed",
            PaymentStatusFilter::Failed => "failed",
        };
        write!(f, "{}", filter)
    }
}
