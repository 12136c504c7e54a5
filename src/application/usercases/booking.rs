use std::sync::Arc;
use std::time::Duration;

use axum::http::StatusCode;
use rand::Rng;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{error, info, warn};

use crate::config::config_model::Simulation;
use crate::domain::entities::movies::MovieEntity;
use crate::domain::entities::payments::NewPaymentEntity;
use crate::domain::repositories::{
    payment_ledger::PaymentLedger, showtime_inventory::ShowtimeInventory,
};
use crate::domain::value_objects::bookings::{BookingSelection, BookingSnapshot};
use crate::domain::value_objects::enums::{
    booking_steps::BookingStep, payment_statuses::PaymentStatus,
};
use crate::domain::value_objects::payments::{DEFAULT_USER_ID, PaymentModel};
use crate::domain::value_objects::showtimes::ShowTimeModel;

const CHECKOUT_FAILURE_PROBABILITY: f64 = 0.1;

#[derive(Debug, Error)]
pub enum BookingError {
    #[error("no movie is selected")]
    NoMovieSelected,

    #[error("showtime not found")]
    ShowtimeNotFound,

    #[error("at least one seat must be selected")]
    NoSeatsSelected,

    #[error("checkout is only available from the payment step")]
    NotAtPaymentStep,

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl BookingError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            BookingError::NoMovieSelected
            | BookingError::NoSeatsSelected
            | BookingError::NotAtPaymentStep => StatusCode::BAD_REQUEST,
            BookingError::ShowtimeNotFound => StatusCode::NOT_FOUND,
            BookingError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type BookingResult<T> = std::result::Result<T, BookingError>;

/// Drives the session's single booking selection through the wizard and
/// runs the simulated checkout against the payment ledger.
pub struct BookingUseCase<I, L>
where
    I: ShowtimeInventory + Send + Sync + 'static,
    L: PaymentLedger + Send + Sync + 'static,
{
    inventory: Arc<I>,
    ledger: Arc<L>,
    selection: RwLock<BookingSelection>,
    processing_delay: Duration,
    confirmation_delay: Duration,
}

impl<I, L> BookingUseCase<I, L>
where
    I: ShowtimeInventory + Send + Sync + 'static,
    L: PaymentLedger + Send + Sync + 'static,
{
    pub fn new(inventory: Arc<I>, ledger: Arc<L>, simulation: &Simulation) -> Self {
        Self {
            inventory,
            ledger,
            selection: RwLock::new(BookingSelection::new()),
            processing_delay: Duration::from_millis(simulation.payment_processing_ms),
            confirmation_delay: Duration::from_millis(simulation.payment_confirmation_ms),
        }
    }

    pub async fn snapshot(&self) -> BookingSnapshot {
        BookingSnapshot::from(&*self.selection.read().await)
    }

    pub async fn select_movie(&self, movie: MovieEntity) -> BookingSnapshot {
        info!(movie_id = movie.id, title = %movie.title, "booking: movie selected");
        let mut selection = self.selection.write().await;
        selection.select_movie(movie);
        BookingSnapshot::from(&*selection)
    }

    /// Showtimes for the currently selected movie, generated (or replayed
    /// from the session cache) by the inventory.
    pub async fn list_showtimes(&self) -> BookingResult<Vec<ShowTimeModel>> {
        let movie = self
            .selected_movie()
            .await
            .ok_or(BookingError::NoMovieSelected)?;

        let show_times = self
            .inventory
            .showtimes_for(&movie)
            .await
            .map_err(BookingError::Internal)?;

        Ok(show_times.iter().map(ShowTimeModel::from).collect())
    }

    pub async fn select_showtime(&self, showtime_id: &str) -> BookingResult<BookingSnapshot> {
        let movie = self
            .selected_movie()
            .await
            .ok_or(BookingError::NoMovieSelected)?;

        let show_times = self
            .inventory
            .showtimes_for(&movie)
            .await
            .map_err(BookingError::Internal)?;
        let show_time = show_times
            .into_iter()
            .find(|show_time| show_time.id == showtime_id)
            .ok_or_else(|| {
                warn!(showtime_id, "booking: unknown showtime selected");
                BookingError::ShowtimeNotFound
            })?;

        let mut selection = self.selection.write().await;
        if !selection.select_showtime(show_time) {
            return Err(BookingError::NoMovieSelected);
        }
        info!(showtime_id, "booking: showtime selected");
        Ok(BookingSnapshot::from(&*selection))
    }

    /// Seat toggles follow the map's rules silently: booked seats, unknown
    /// ids and the eleventh seat are all ignored without an error.
    pub async fn toggle_seat(&self, seat_id: &str) -> BookingSnapshot {
        let mut selection = self.selection.write().await;
        let changed = selection.toggle_seat(seat_id);
        info!(seat_id, changed, "booking: seat toggled");
        BookingSnapshot::from(&*selection)
    }

    pub async fn proceed_to_payment(&self) -> BookingResult<BookingSnapshot> {
        let mut selection = self.selection.write().await;
        if !selection.proceed_to_payment() {
            return Err(BookingError::NoSeatsSelected);
        }
        info!(
            seats = selection.selected_seats().len(),
            total = selection.total_amount(),
            "booking: proceeding to payment"
        );
        Ok(BookingSnapshot::from(&*selection))
    }

    pub async fn step_back(&self) -> BookingSnapshot {
        let mut selection = self.selection.write().await;
        let step = selection.step_back();
        info!(step = %step, "booking: stepped back");
        BookingSnapshot::from(&*selection)
    }

    pub async fn reset(&self) -> BookingSnapshot {
        let mut selection = self.selection.write().await;
        selection.reset();
        info!("booking: selection reset");
        BookingSnapshot::from(&*selection)
    }

    /// Simulated checkout: a fixed processing suspension, then a ledger
    /// entry whose status is drawn 90% completed / 10% failed, then a fixed
    /// confirmation display suspension before the wizard returns to the
    /// movie list. Once started, a checkout always resolves; the failed
    /// draw is an outcome recorded in the ledger, never an error.
    pub async fn checkout(&self) -> BookingResult<PaymentModel> {
        let (movie, amount) = {
            let selection = self.selection.read().await;
            if selection.step() != BookingStep::Payment {
                return Err(BookingError::NotAtPaymentStep);
            }
            let movie = selection
                .selected_movie()
                .cloned()
                .ok_or(BookingError::NoMovieSelected)?;
            if selection.selected_seats().is_empty() {
                return Err(BookingError::NoSeatsSelected);
            }
            (movie, selection.total_amount())
        };

        info!(movie_id = movie.id, amount, "booking: processing payment");
        tokio::time::sleep(self.processing_delay).await;

        let status = if rand::thread_rng().r#gen::<f64>() > CHECKOUT_FAILURE_PROBABILITY {
            PaymentStatus::Completed
        } else {
            PaymentStatus::Failed
        };

        let recorded = self
            .ledger
            .record(NewPaymentEntity {
                movie_id: movie.id,
                user_id: DEFAULT_USER_ID.to_string(),
                amount: f64::from(amount),
                status,
                movie_title: movie.title.clone(),
            })
            .await
            .map_err(|err| {
                error!(movie_id = movie.id, error = ?err, "booking: failed to record payment");
                BookingError::Internal(err)
            })?;

        info!(
            payment_id = %recorded.id,
            status = %recorded.status,
            "booking: payment recorded"
        );

        tokio::time::sleep(self.confirmation_delay).await;
        self.selection.write().await.reset();

        Ok(PaymentModel::from(recorded))
    }

    async fn selected_movie(&self) -> Option<MovieEntity> {
        self.selection.read().await.selected_movie().cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::payments::PaymentEntity;
    use crate::domain::entities::showtimes::generate_show_times;
    use crate::domain::entities::showtimes::ShowTimeEntity;
    use crate::domain::repositories::payment_ledger::MockPaymentLedger;
    use crate::domain::repositories::showtime_inventory::MockShowtimeInventory;
    use crate::domain::value_objects::enums::booking_steps::BookingStep;
    use crate::domain::value_objects::enums::seat_statuses::SeatStatus;
    use chrono::{NaiveDate, Utc};

    fn zero_delays() -> Simulation {
        Simulation {
            payment_processing_ms: 0,
            payment_confirmation_ms: 0,
            publish_ms: 0,
        }
    }

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

    fn fixed_show_times(movie_id: i64) -> Vec<ShowTimeEntity> {
        let first_day = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();
        generate_show_times(&sample_movie(movie_id), first_day)
    }

    fn inventory_returning(show_times: Vec<ShowTimeEntity>) -> MockShowtimeInventory {
        let mut inventory = MockShowtimeInventory::new();
        inventory
            .expect_showtimes_for()
            .returning(move |_| {
                let show_times = show_times.clone();
                Ok(show_times)
            });
        inventory
    }

    fn recording_ledger() -> MockPaymentLedger {
        let mut ledger = MockPaymentLedger::new();
        ledger
            .expect_record()
            .returning(|new_payment| {
                Ok(PaymentEntity::record_now(new_payment))
            });
        ledger
    }

    fn usecase_with(
        inventory: MockShowtimeInventory,
        ledger: MockPaymentLedger,
    ) -> BookingUseCase<MockShowtimeInventory, MockPaymentLedger> {
        BookingUseCase::new(Arc::new(inventory), Arc::new(ledger), &zero_delays())
    }

    async fn usecase_at_payment() -> BookingUseCase<MockShowtimeInventory, MockPaymentLedger> {
        let show_times = fixed_show_times(1);
        let available_seat_id = show_times[0]
            .seats
            .iter()
            .find(|seat| seat.status == SeatStatus::Available)
            .map(|seat| seat.id.clone())
            .expect("a generated map holds available seats");
        let showtime_id = show_times[0].id.clone();

        let usecase = usecase_with(inventory_returning(show_times), recording_ledger());
        usecase.select_movie(sample_movie(1)).await;
        usecase.select_showtime(&showtime_id).await.unwrap();
        usecase.toggle_seat(&available_seat_id).await;
        usecase.proceed_to_payment().await.unwrap();
        usecase
    }

    #[tokio::test]
    async fn listing_showtimes_requires_a_movie() {
        let usecase = usecase_with(MockShowtimeInventory::new(), MockPaymentLedger::new());
        let err = usecase.list_showtimes().await.unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn selecting_an_unknown_showtime_is_not_found() {
        let usecase = usecase_with(
            inventory_returning(fixed_show_times(1)),
            MockPaymentLedger::new(),
        );
        usecase.select_movie(sample_movie(1)).await;

        let err = usecase.select_showtime("nope").await.unwrap_err();
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn the_wizard_walks_forward_through_all_steps() {
        let show_times = fixed_show_times(1);
        let showtime_id = show_times[0].id.clone();
        let seat_id = show_times[0]
            .seats
            .iter()
            .find(|seat| seat.status == SeatStatus::Available)
            .map(|seat| seat.id.clone())
            .unwrap();

        let usecase = usecase_with(inventory_returning(show_times), MockPaymentLedger::new());

        let snapshot = usecase.select_movie(sample_movie(1)).await;
        assert_eq!(snapshot.step, BookingStep::ShowTimes);

        let snapshot = usecase.select_showtime(&showtime_id).await.unwrap();
        assert_eq!(snapshot.step, BookingStep::Seats);

        let snapshot = usecase.toggle_seat(&seat_id).await;
        assert_eq!(snapshot.selected_seats.len(), 1);
        assert!(snapshot.total_amount > 0);

        let snapshot = usecase.proceed_to_payment().await.unwrap();
        assert_eq!(snapshot.step, BookingStep::Payment);
    }

    #[tokio::test]
    async fn proceeding_with_no_seats_is_rejected() {
        let show_times = fixed_show_times(1);
        let showtime_id = show_times[0].id.clone();

        let usecase = usecase_with(inventory_returning(show_times), MockPaymentLedger::new());
        usecase.select_movie(sample_movie(1)).await;
        usecase.select_showtime(&showtime_id).await.unwrap();

        let err = usecase.proceed_to_payment().await.unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn checkout_records_the_seat_total_and_resets_the_wizard() {
        let usecase = usecase_at_payment().await;
        let total_before = usecase.snapshot().await.total_amount;

        let payment = usecase.checkout().await.unwrap();

        assert_eq!(payment.movie_id, 1);
        assert_eq!(payment.user_id, DEFAULT_USER_ID);
        assert_eq!(payment.amount, f64::from(total_before));
        assert!(matches!(
            payment.status,
            PaymentStatus::Completed | PaymentStatus::Failed
        ));
        assert!(payment.timestamp <= Utc::now());

        let snapshot = usecase.snapshot().await;
        assert_eq!(snapshot.step, BookingStep::Movies);
        assert!(snapshot.selected_movie.is_none());
        assert!(snapshot.selected_seats.is_empty());
    }

    #[tokio::test]
    async fn checkout_outside_the_payment_step_is_rejected() {
        // The ledger mock has no `record` expectation, so a stray ledger
        // write would fail the test on its own.
        let usecase = usecase_with(
            inventory_returning(fixed_show_times(1)),
            MockPaymentLedger::new(),
        );
        usecase.select_movie(sample_movie(1)).await;

        let err = usecase.checkout().await.unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }
}
