use std::fmt::Display;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SeatType {
    Regular,
    Premium,
    Vip,
}

impl SeatType {
    /// Row placement decides the tier: front rows are VIP, the middle block
    /// premium, everything behind regular.
    pub fn from_row_index(row_index: usize) -> Self {
        if row_index < 3 {
            SeatType::Vip
        } else if row_index < 6 {
            SeatType::Premium
        } else {
            SeatType::Regular
        }
    }

    pub fn price(&self) -> u32 {
        match self {
            SeatType::Vip => 300,
            SeatType::Premium => 200,
            SeatType::Regular => 150,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SeatType::Regular => "regular",
            SeatType::Premium => "premium",
            SeatType::Vip => "vip",
        }
    }
}

impl Display for SeatType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
