use std::fmt::Display;

use serde::{Deserialize, Serialize};

#[derive(Default, Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BookingStep {
    #[default]
    Movies,
    ShowTimes,
    Seats,
    Payment,
}

impl BookingStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStep::Movies => "movies",
            BookingStep::ShowTimes => "showtimes",
            BookingStep::Seats => "seats",
            BookingStep::Payment => "payment",
        }
    }
}

impl Display for BookingStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
