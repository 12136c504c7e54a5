pub mod payment_ledger;
pub mod showtime_inventory;
