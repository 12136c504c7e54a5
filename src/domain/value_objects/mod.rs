pub mod bookings;
pub mod enums;
pub mod movies;
pub mod payments;
pub mod showtimes;
pub mod sorting;
