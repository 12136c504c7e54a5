use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    response::IntoResponse,
    routing::{get, post},
};

use crate::application::usercases::booking::BookingUseCase;
use crate::config::config_model::Simulation;
use crate::domain::entities::movies::MovieEntity;
use crate::domain::repositories::{
    payment_ledger::PaymentLedger, showtime_inventory::ShowtimeInventory,
};
use crate::infrastructure::axum_http::error_responses;
use crate::infrastructure::memory::{
    payment_ledger::InMemoryPaymentLedger, showtime_inventory::GeneratedShowtimeInventory,
};

pub fn routes(
    inventory: Arc<GeneratedShowtimeInventory>,
    ledger: Arc<InMemoryPaymentLedger>,
    simulation: &Simulation,
) -> Router {
    let booking_usecase = BookingUseCase::new(inventory, ledger, simulation);

    Router::new()
        .route(
            "/current",
            get(current::<GeneratedShowtimeInventory, InMemoryPaymentLedger>),
        )
        .route(
            "/movie",
            post(select_movie::<GeneratedShowtimeInventory, InMemoryPaymentLedger>),
        )
        .route(
            "/showtimes",
            get(list_showtimes::<GeneratedShowtimeInventory, InMemoryPaymentLedger>),
        )
        .route(
            "/showtime/:showtime_id",
            post(select_showtime::<GeneratedShowtimeInventory, InMemoryPaymentLedger>),
        )
        .route(
            "/seats/:seat_id",
            post(toggle_seat::<GeneratedShowtimeInventory, InMemoryPaymentLedger>),
        )
        .route(
            "/proceed",
            post(proceed::<GeneratedShowtimeInventory, InMemoryPaymentLedger>),
        )
        .route(
            "/back",
            post(step_back::<GeneratedShowtimeInventory, InMemoryPaymentLedger>),
        )
        .route(
            "/checkout",
            post(checkout::<GeneratedShowtimeInventory, InMemoryPaymentLedger>),
        )
        .route(
            "/reset",
            post(reset::<GeneratedShowtimeInventory, InMemoryPaymentLedger>),
        )
        .with_state(Arc::new(booking_usecase))
}

pub async fn current<I, L>(
    State(booking_usecase): State<Arc<BookingUseCase<I, L>>>,
) -> impl IntoResponse
where
    I: ShowtimeInventory + Send + Sync + 'static,
    L: PaymentLedger + Send + Sync + 'static,
{
    Json(booking_usecase.snapshot().await)
}

pub async fn select_movie<I, L>(
    State(booking_usecase): State<Arc<BookingUseCase<I, L>>>,
    Json(movie): Json<MovieEntity>,
) -> impl IntoResponse
where
    I: ShowtimeInventory + Send + Sync + 'static,
    L: PaymentLedger + Send + Sync + 'static,
{
    Json(booking_usecase.select_movie(movie).await)
}

pub async fn list_showtimes<I, L>(
    State(booking_usecase): State<Arc<BookingUseCase<I, L>>>,
) -> impl IntoResponse
where
    I: ShowtimeInventory + Send + Sync + 'static,
    L: PaymentLedger + Send + Sync + 'static,
{
    match booking_usecase.list_showtimes().await {
        Ok(show_times) => Json(show_times).into_response(),
        Err(err) => error_responses::usecase_error(
            err.status_code(),
            err,
            "bookings: failed to list showtimes",
        ),
    }
}

pub async fn select_showtime<I, L>(
    State(booking_usecase): State<Arc<BookingUseCase<I, L>>>,
    Path(showtime_id): Path<String>,
) -> impl IntoResponse
where
    I: ShowtimeInventory + Send + Sync + 'static,
    L: PaymentLedger + Send + Sync + 'static,
{
    match booking_usecase.select_showtime(&showtime_id).await {
        Ok(snapshot) => Json(snapshot).into_response(),
        Err(err) => error_responses::usecase_error(
            err.status_code(),
            err,
            "bookings: failed to select showtime",
        ),
    }
}

pub async fn toggle_seat<I, L>(
    State(booking_usecase): State<Arc<BookingUseCase<I, L>>>,
    Path(seat_id): Path<String>,
) -> impl IntoResponse
where
    I: ShowtimeInventory + Send + Sync + 'static,
    L: PaymentLedger + Send + Sync + 'static,
{
    Json(booking_usecase.toggle_seat(&seat_id).await)
}

pub async fn proceed<I, L>(
    State(booking_usecase): State<Arc<BookingUseCase<I, L>>>,
) -> impl IntoResponse
where
    I: ShowtimeInventory + Send + Sync + 'static,
    L: PaymentLedger + Send + Sync + 'static,
{
    match booking_usecase.proceed_to_payment().await {
        Ok(snapshot) => Json(snapshot).into_response(),
        Err(err) => error_responses::usecase_error(
            err.status_code(),
            err,
            "bookings: failed to proceed to payment",
        ),
    }
}

pub async fn step_back<I, L>(
    State(booking_usecase): State<Arc<BookingUseCase<I, L>>>,
) -> impl IntoResponse
where
    I: ShowtimeInventory + Send + Sync + 'static,
    L: PaymentLedger + Send + Sync + 'static,
{
    Json(booking_usecase.step_back().await)
}

pub async fn checkout<I, L>(
    State(booking_usecase): State<Arc<BookingUseCase<I, L>>>,
) -> impl IntoResponse
where
    I: ShowtimeInventory + Send + Sync + 'static,
    L: PaymentLedger + Send + Sync + 'static,
{
    match booking_usecase.checkout().await {
        Ok(payment) => Json(payment).into_response(),
        Err(err) => {
            error_responses::usecase_error(err.status_code(), err, "bookings: checkout failed")
        }
    }
}

pub async fn reset<I, L>(
    State(booking_usecase): State<Arc<BookingUseCase<I, L>>>,
) -> impl IntoResponse
where
    I: ShowtimeInventory + Send + Sync + 'static,
    L: PaymentLedger + Send + Sync + 'static,
{
    Json(booking_usecase.reset().await)
}
