use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// `Available` and `Booked` are fixed at seat-map generation time;
/// `Selected` only ever appears on seats held inside a booking selection.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SeatStatus {
    Available,
    Booked,
    Selected,
}

impl SeatStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SeatStatus::Available => "available",
            SeatStatus::Booked => "booked",
            SeatStatus::Selected => "selected",
        }
    }
}

impl Display for SeatStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
