use chrono::{Days, NaiveDate, NaiveTime};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::domain::entities::movies::MovieEntity;
use crate::domain::value_objects::enums::{seat_statuses::SeatStatus, seat_types::SeatType};

pub const SEAT_ROWS: [char; 10] = ['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J'];
pub const SEATS_PER_ROW: u8 = 12;
pub const SCHEDULE_DAYS: u64 = 3;
pub const THEATERS: [&str; 3] = ["Theater A", "Theater B", "Theater C"];

const SCREENING_TIMES: [(u32, u32); 4] = [(10, 0), (13, 30), (17, 0), (20, 30)];
const BOOKED_SEAT_PROBABILITY: f64 = 0.2;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SeatEntity {
    /// Row letter + seat number, unique within one seat map (e.g. `A7`).
    pub id: String,
    pub row: char,
    pub number: u8,
    pub seat_type: SeatType,
    pub status: SeatStatus,
    pub price: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShowTimeEntity {
    /// `{movie_id}-{date}-{time}-{theater}`; the identity quadruple.
    pub id: String,
    pub movie_id: i64,
    pub movie_title: String,
    pub movie_poster: Option<String>,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub theater: String,
    pub seats: Vec<SeatEntity>,
}

/// One screening schedule for a movie: 3 calendar days from `first_day`,
/// 4 times, 3 theaters. Every showtime carries its own independently drawn
/// seat map, so availability differs between screenings of the same title.
pub fn generate_show_times(movie: &MovieEntity, first_day: NaiveDate) -> Vec<ShowTimeEntity> {
    let mut show_times = Vec::with_capacity(
        SCHEDULE_DAYS as usize * SCREENING_TIMES.len() * THEATERS.len(),
    );

    for day_offset in 0..SCHEDULE_DAYS {
        let date = first_day + Days::new(day_offset);

        for (hour, minute) in SCREENING_TIMES {
            let time = NaiveTime::from_hms_opt(hour, minute, 0)
                .expect("screening times are valid clock times");

            for theater in THEATERS {
                show_times.push(ShowTimeEntity {
                    id: format!(
                        "{}-{}-{}-{}",
                        movie.id,
                        date,
                        time.format("%H:%M"),
                        theater
                    ),
                    movie_id: movie.id,
                    movie_title: movie.title.clone(),
                    movie_poster: movie.poster_path.clone(),
                    date,
                    time,
                    theater: theater.to_string(),
                    seats: generate_seat_map(),
                });
            }
        }
    }

    show_times
}

/// 10 rows of 12 seats. Tier and price are a pure function of the row;
/// roughly one seat in five starts out booked.
pub fn generate_seat_map() -> Vec<SeatEntity> {
    let mut rng = rand::thread_rng();
    let mut seats = Vec::with_capacity(SEAT_ROWS.len() * SEATS_PER_ROW as usize);

    for (row_index, row) in SEAT_ROWS.iter().enumerate() {
        for number in 1..=SEATS_PER_ROW {
            let seat_type = SeatType::from_row_index(row_index);
            let status = if rng.r#gen::<f64>() < BOOKED_SEAT_PROBABILITY {
                SeatStatus::Booked
            } else {
                SeatStatus::Available
            };

            seats.push(SeatEntity {
                id: format!("{}{}", row, number),
                row: *row,
                number,
                seat_type,
                status,
                price: seat_type.price(),
            });
        }
    }

    seats
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_movie() -> MovieEntity {
        MovieEntity {
            id: 603,
            title: "The Matrix".to_string(),
            overview: String::new(),
            release_date: "1999-03-31".to_string(),
            poster_path: Some("/matrix.jpg".to_string()),
            vote_average: 8.2,
            popularity: 0.0,
            adult: false,
        }
    }

    #[test]
    fn seat_map_has_ten_rows_of_twelve() {
        let seats = generate_seat_map();
        assert_eq!(seats.len(), 120);

        let mut ids: Vec<&str> = seats.iter().map(|seat| seat.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 120, "seat ids must be unique within a map");
    }

    #[test]
    fn seat_tier_and_price_are_pure_functions_of_the_row() {
        for seat in generate_seat_map() {
            let row_index = SEAT_ROWS
                .iter()
                .position(|row| *row == seat.row)
                .expect("row letter comes from the fixed row set");
            let expected = SeatType::from_row_index(row_index);
            assert_eq!(seat.seat_type, expected);
            assert_eq!(seat.price, expected.price());
        }
    }

    #[test]
    fn generated_seats_are_never_pre_selected() {
        assert!(
            generate_seat_map()
                .iter()
                .all(|seat| seat.status != SeatStatus::Selected)
        );
    }

    #[test]
    fn schedule_is_three_days_by_four_times_by_three_theaters() {
        let movie = sample_movie();
        let first_day = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();
        let show_times = generate_show_times(&movie, first_day);

        assert_eq!(show_times.len(), 36);
        assert!(show_times.iter().all(|st| st.seats.len() == 120));
        assert!(show_times.iter().all(|st| st.movie_id == movie.id));

        let last_day = first_day + Days::new(SCHEDULE_DAYS - 1);
        assert!(
            show_times
                .iter()
                .all(|st| st.date >= first_day && st.date <= last_day)
        );

        let mut ids: Vec<&str> = show_times.iter().map(|st| st.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 36, "showtime identity quadruples must be unique");
    }

    #[test]
    fn showtime_id_embeds_the_identity_quadruple() {
        let movie = sample_movie();
        let first_day = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();
        let show_times = generate_show_times(&movie, first_day);

        assert!(
            show_times
                .iter()
                .any(|st| st.id == "603-2026-08-07-10:00-Theater A")
        );
    }
}
