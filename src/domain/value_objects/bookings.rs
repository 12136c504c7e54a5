use serde::Serialize;

use crate::domain::entities::movies::MovieEntity;
use crate::domain::entities::showtimes::{SeatEntity, ShowTimeEntity};
use crate::domain::value_objects::enums::{
    booking_steps::BookingStep, seat_statuses::SeatStatus,
};
use crate::domain::value_objects::showtimes::ShowTimeModel;

pub const MAX_SEATS_PER_BOOKING: usize = 10;
pub const CONVENIENCE_FEE: u32 = 25;
pub const GST_RATE: f64 = 0.18;

/// The four-step booking wizard: movies → showtimes → seats → payment.
///
/// One instance exists per session. Selected seats always belong to the
/// selected showtime's map, and the total is recomputed from seat prices on
/// every read, so it can never go stale after a toggle.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingSelection {
    selected_movie: Option<MovieEntity>,
    selected_showtime: Option<ShowTimeEntity>,
    selected_seats: Vec<SeatEntity>,
    step: BookingStep,
}

impl BookingSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> BookingStep {
        self.step
    }

    pub fn selected_movie(&self) -> Option<&MovieEntity> {
        self.selected_movie.as_ref()
    }

    pub fn selected_showtime(&self) -> Option<&ShowTimeEntity> {
        self.selected_showtime.as_ref()
    }

    pub fn selected_seats(&self) -> &[SeatEntity] {
        &self.selected_seats
    }

    pub fn total_amount(&self) -> u32 {
        self.selected_seats.iter().map(|seat| seat.price).sum()
    }

    pub fn select_movie(&mut self, movie: MovieEntity) {
        if self
            .selected_movie
            .as_ref()
            .is_some_and(|current| current.id != movie.id)
        {
            self.selected_showtime = None;
            self.selected_seats.clear();
        }
        self.selected_movie = Some(movie);
        self.step = BookingStep::ShowTimes;
    }

    /// Picks a showtime and advances to seat selection. Rejected (returns
    /// `false`) while no movie is selected. Switching showtimes drops any
    /// seats picked for the previous one.
    pub fn select_showtime(&mut self, show_time: ShowTimeEntity) -> bool {
        if self.selected_movie.is_none() {
            return false;
        }

        if self
            .selected_showtime
            .as_ref()
            .is_some_and(|current| current.id != show_time.id)
        {
            self.selected_seats.clear();
        }

        self.selected_showtime = Some(show_time);
        self.step = BookingStep::Seats;
        true
    }

    /// Toggles a seat of the selected showtime's map. Booked seats and
    /// unknown ids are ignored, as is any attempt to grow the selection past
    /// ten seats. Returns whether the selection changed.
    pub fn toggle_seat(&mut self, seat_id: &str) -> bool {
        let Some(show_time) = self.selected_showtime.as_ref() else {
            return false;
        };
        let Some(seat) = show_time.seats.iter().find(|seat| seat.id == seat_id) else {
            return false;
        };

        if seat.status == SeatStatus::Booked {
            return false;
        }

        if let Some(position) = self
            .selected_seats
            .iter()
            .position(|selected| selected.id == seat_id)
        {
            self.selected_seats.remove(position);
            return true;
        }

        if self.selected_seats.len() >= MAX_SEATS_PER_BOOKING {
            return false;
        }

        let mut selected = seat.clone();
        selected.status = SeatStatus::Selected;
        self.selected_seats.push(selected);
        true
    }

    /// Seats → payment, guarded on at least one selected seat.
    pub fn proceed_to_payment(&mut self) -> bool {
        if self.step != BookingStep::Seats || self.selected_seats.is_empty() {
            return false;
        }
        self.step = BookingStep::Payment;
        true
    }

    /// One step back through the wizard; a no-op on the first screen.
    pub fn step_back(&mut self) -> BookingStep {
        self.step = match self.step {
            BookingStep::Payment => BookingStep::Seats,
            BookingStep::Seats => BookingStep::ShowTimes,
            BookingStep::ShowTimes | BookingStep::Movies => BookingStep::Movies,
        };
        self.step
    }

    /// Discards the whole selection and returns to the movie list. No undo.
    pub fn reset(&mut self) {
        self.selected_movie = None;
        self.selected_showtime = None;
        self.selected_seats.clear();
        self.step = BookingStep::Movies;
    }

    pub fn order_summary(&self) -> OrderSummary {
        let seat_total = self.total_amount();
        let gst = (f64::from(seat_total) * GST_RATE).round() as u32;
        OrderSummary {
            seat_total,
            convenience_fee: CONVENIENCE_FEE,
            gst,
            grand_total: seat_total + CONVENIENCE_FEE + gst,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct OrderSummary {
    pub seat_total: u32,
    pub convenience_fee: u32,
    pub gst: u32,
    pub grand_total: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct BookingSnapshot {
    pub selected_movie: Option<MovieEntity>,
    pub selected_showtime: Option<ShowTimeModel>,
    pub selected_seats: Vec<SeatEntity>,
    pub step: BookingStep,
    pub total_amount: u32,
    pub order_summary: OrderSummary,
}

impl From<&BookingSelection> for BookingSnapshot {
    fn from(selection: &BookingSelection) -> Self {
        Self {
            selected_movie: selection.selected_movie.clone(),
            selected_showtime: selection.selected_showtime.as_ref().map(ShowTimeModel::from),
            selected_seats: selection.selected_seats.clone(),
            step: selection.step,
            total_amount: selection.total_amount(),
            order_summary: selection.order_summary(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::enums::seat_types::SeatType;
    use chrono::{NaiveDate, NaiveTime};

    fn sample_movie(id: i64) -> MovieEntity {
        MovieEntity {
            id,
            title: format!("Movie {}", id),
            overview: String::new(),
            release_date: "2026-01-01".to_string(),
            poster_path: None,
            vote_average: 7.0,
            popularity: 0.0,
            adult: false,
        }
    }

    fn seat(id: &str, seat_type: SeatType, status: SeatStatus) -> SeatEntity {
        let mut chars = id.chars();
        let row = chars.next().unwrap();
        let number: u8 = chars.as_str().parse().unwrap();
        SeatEntity {
            id: id.to_string(),
            row,
            number,
            seat_type,
            status,
            price: seat_type.price(),
        }
    }

    fn sample_showtime(movie_id: i64, seats: Vec<SeatEntity>) -> ShowTimeEntity {
        ShowTimeEntity {
            id: format!("{}-2026-08-07-10:00-Theater A", movie_id),
            movie_id,
            movie_title: format!("Movie {}", movie_id),
            movie_poster: None,
            date: NaiveDate::from_ymd_opt(2026, 8, 7).unwrap(),
            time: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            theater: "Theater A".to_string(),
            seats,
        }
    }

    fn selection_at_seats() -> BookingSelection {
        let mut selection = BookingSelection::new();
        selection.select_movie(sample_movie(1));
        let seats = vec![
            seat("A1", SeatType::Vip, SeatStatus::Available),
            seat("D1", SeatType::Premium, SeatStatus::Available),
            seat("G1", SeatType::Regular, SeatStatus::Available),
            seat("G2", SeatType::Regular, SeatStatus::Booked),
        ];
        assert!(selection.select_showtime(sample_showtime(1, seats)));
        selection
    }

    #[test]
    fn starts_on_the_movie_list() {
        let selection = BookingSelection::new();
        assert_eq!(selection.step(), BookingStep::Movies);
        assert!(selection.selected_movie().is_none());
        assert!(selection.selected_showtime().is_none());
        assert!(selection.selected_seats().is_empty());
    }

    #[test]
    fn selecting_a_movie_advances_to_showtimes() {
        let mut selection = BookingSelection::new();
        selection.select_movie(sample_movie(1));
        assert_eq!(selection.step(), BookingStep::ShowTimes);
    }

    #[test]
    fn selecting_a_showtime_requires_a_movie() {
        let mut selection = BookingSelection::new();
        assert!(!selection.select_showtime(sample_showtime(1, Vec::new())));
        assert_eq!(selection.step(), BookingStep::Movies);
    }

    #[test]
    fn toggle_pair_restores_the_original_selection() {
        let mut selection = selection_at_seats();
        assert!(selection.toggle_seat("A1"));
        assert_eq!(selection.selected_seats().len(), 1);
        assert!(selection.toggle_seat("A1"));
        assert!(selection.selected_seats().is_empty());
    }

    #[test]
    fn booked_seats_are_silently_ignored() {
        let mut selection = selection_at_seats();
        assert!(!selection.toggle_seat("G2"));
        assert!(selection.selected_seats().is_empty());
    }

    #[test]
    fn unknown_seat_ids_are_silently_ignored() {
        let mut selection = selection_at_seats();
        assert!(!selection.toggle_seat("Z9"));
        assert!(selection.selected_seats().is_empty());
    }

    #[test]
    fn selection_never_grows_past_ten_seats() {
        let mut selection = BookingSelection::new();
        selection.select_movie(sample_movie(1));
        let seats = (1u8..=12)
            .map(|number| {
                seat(
                    &format!("G{}", number),
                    SeatType::Regular,
                    SeatStatus::Available,
                )
            })
            .collect();
        assert!(selection.select_showtime(sample_showtime(1, seats)));

        for number in 1..=10 {
            assert!(selection.toggle_seat(&format!("G{}", number)));
        }
        assert_eq!(selection.selected_seats().len(), 10);

        assert!(!selection.toggle_seat("G11"));
        assert_eq!(selection.selected_seats().len(), 10);
    }

    #[test]
    fn total_amount_tracks_selected_seat_prices() {
        let mut selection = selection_at_seats();
        assert!(selection.toggle_seat("G1"));
        assert!(selection.toggle_seat("D1"));
        assert_eq!(selection.total_amount(), 350);

        assert!(selection.toggle_seat("D1"));
        assert_eq!(selection.total_amount(), 150);
    }

    #[test]
    fn proceeding_requires_at_least_one_seat() {
        let mut selection = selection_at_seats();
        assert!(!selection.proceed_to_payment());
        assert_eq!(selection.step(), BookingStep::Seats);

        assert!(selection.toggle_seat("A1"));
        assert!(selection.proceed_to_payment());
        assert_eq!(selection.step(), BookingStep::Payment);
    }

    #[test]
    fn stepping_back_walks_the_wizard_in_reverse() {
        let mut selection = selection_at_seats();
        assert!(selection.toggle_seat("A1"));
        assert!(selection.proceed_to_payment());

        assert_eq!(selection.step_back(), BookingStep::Seats);
        assert_eq!(selection.step_back(), BookingStep::ShowTimes);
        assert_eq!(selection.step_back(), BookingStep::Movies);
        assert_eq!(selection.step_back(), BookingStep::Movies);
    }

    #[test]
    fn reset_restores_the_initial_state() {
        let mut selection = selection_at_seats();
        assert!(selection.toggle_seat("G1"));
        assert!(selection.toggle_seat("D1"));
        assert_eq!(selection.total_amount(), 350);

        selection.reset();
        assert_eq!(selection, BookingSelection::new());
    }

    #[test]
    fn switching_showtimes_drops_seats_of_the_previous_one() {
        let mut selection = selection_at_seats();
        assert!(selection.toggle_seat("A1"));

        let other = ShowTimeEntity {
            id: "1-2026-08-08-10:00-Theater B".to_string(),
            ..sample_showtime(1, vec![seat("A1", SeatType::Vip, SeatStatus::Available)])
        };
        assert!(selection.select_showtime(other));
        assert!(selection.selected_seats().is_empty());
    }

    #[test]
    fn order_summary_adds_fee_and_rounded_gst() {
        let mut selection = selection_at_seats();
        assert!(selection.toggle_seat("A1"));
        assert!(selection.toggle_seat("D1"));

        let summary = selection.order_summary();
        assert_eq!(summary.seat_total, 500);
        assert_eq!(summary.convenience_fee, 25);
        assert_eq!(summary.gst, 90);
        assert_eq!(summary.grand_total, 615);
    }
}
