pub mod booking;
pub mod movie_listing;
pub mod payments_dashboard;
pub mod publish;
