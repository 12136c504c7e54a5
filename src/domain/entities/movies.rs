use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Movie metadata as delivered by the external catalog. Read-only on our
/// side; never mutated locally.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieEntity {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub overview: String,
    /// `YYYY-MM-DD` as delivered by the catalog; may be empty for
    /// unscheduled titles.
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub popularity: f64,
    #[serde(default)]
    pub adult: bool,
}

impl MovieEntity {
    /// Release date promoted to a calendar date, when the catalog sent one.
    pub fn released_on(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.release_date, "%Y-%m-%d").ok()
    }
}
