pub mod booking_steps;
pub mod date_windows;
pub mod payment_status_filters;
pub mod payment_statuses;
pub mod seat_statuses;
pub mod seat_types;
pub mod sort_orders;
