pub mod movie_catalog;
pub mod payment_ledger;
pub mod showtime_inventory;
