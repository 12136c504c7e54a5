use std::collections::HashMap;

use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::entities::movies::MovieEntity;
use crate::domain::entities::showtimes::{ShowTimeEntity, generate_show_times};
use crate::domain::repositories::showtime_inventory::ShowtimeInventory;

/// Synthetic inventory. The schedule for a movie is generated on first
/// request and memoized for the session, so navigating back and forth never
/// reshuffles which seats are booked.
#[derive(Default)]
pub struct GeneratedShowtimeInventory {
    cache: RwLock<HashMap<i64, Vec<ShowTimeEntity>>>,
}

impl GeneratedShowtimeInventory {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ShowtimeInventory for GeneratedShowtimeInventory {
    async fn showtimes_for(&self, movie: &MovieEntity) -> Result<Vec<ShowTimeEntity>> {
        if let Some(show_times) = self.cache.read().await.get(&movie.id) {
            return Ok(show_times.clone());
        }

        let mut cache = self.cache.write().await;
        // A racing generator may have filled the slot between the two locks.
        let show_times = cache
            .entry(movie.id)
            .or_insert_with(|| {
                debug!(movie_id = movie.id, "inventory: generating schedule");
                generate_show_times(movie, Utc::now().date_naive())
            })
            .clone();

        Ok(show_times)
    }
}
