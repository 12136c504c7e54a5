pub mod movies;
pub mod payments;
pub mod showtimes;
