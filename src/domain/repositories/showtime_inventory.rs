use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;

use crate::domain::entities::{movies::MovieEntity, showtimes::ShowTimeEntity};

/// Screening inventory for a movie. The in-memory implementation generates
/// synthetic schedules and keeps them stable for the session.
#[automock]
#[async_trait]
pub trait ShowtimeInventory {
    async fn showtimes_for(&self, movie: &MovieEntity) -> Result<Vec<ShowTimeEntity>>;
}
