use chrono::{DateTime, Duration, Months, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// Creation-time window applied to ledger views.
#[derive(Default, Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DateWindow {
    #[default]
    All,
    Today,
    Week,
    Month,
}

impl DateWindow {
    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "all" => Some(DateWindow::All),
            "today" => Some(DateWindow::Today),
            "week" => Some(DateWindow::Week),
            "month" => Some(DateWindow::Month),
            _ => None,
        }
    }

    /// Inclusive lower bound of the window relative to `now`, when one applies.
    pub fn cutoff(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        match self {
            DateWindow::All => None,
            DateWindow::Today => Some(now.date_naive().and_time(NaiveTime::MIN).and_utc()),
            DateWindow::Week => Some(now - Duration::days(7)),
            DateWindow::Month => Some(
                now.checked_sub_months(Months::new(1))
                    .unwrap_or(now - Duration::days(30)),
            ),
        }
    }
}
