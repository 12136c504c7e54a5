use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::entities::showtimes::{SeatEntity, ShowTimeEntity};

/// Outward-facing showtime with the screening time rendered as `HH:MM`.
#[derive(Debug, Clone, Serialize)]
pub struct ShowTimeModel {
    pub id: String,
    pub movie_id: i64,
    pub movie_title: String,
    pub movie_poster: Option<String>,
    pub date: NaiveDate,
    pub time: String,
    pub theater: String,
    pub seats: Vec<SeatEntity>,
}

impl From<&ShowTimeEntity> for ShowTimeModel {
    fn from(show_time: &ShowTimeEntity) -> Self {
        Self {
            id: show_time.id.clone(),
            movie_id: show_time.movie_id,
            movie_title: show_time.movie_title.clone(),
            movie_poster: show_time.movie_poster.clone(),
            date: show_time.date,
            time: show_time.time.format("%H:%M").to_string(),
            theater: show_time.theater.clone(),
            seats: show_time.seats.clone(),
        }
    }
}
