pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

use std::sync::Arc;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::infrastructure::{
    axum_http::http_serve,
    catalog::{tmdb_client::TmdbCatalog, token_store::BearerTokenStore},
    memory::{payment_ledger::InMemoryPaymentLedger, showtime_inventory::GeneratedShowtimeInventory},
};

pub async fn run() -> Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let dotenvy_env = config::config_loader::load()?;
    info!("ENV has been loaded");

    let token_store = Arc::new(BearerTokenStore::new(
        dotenvy_env.catalog.bearer_token.clone(),
    ));
    let catalog = Arc::new(TmdbCatalog::new(
        &dotenvy_env.catalog,
        Arc::clone(&token_store),
    )?);
    let ledger = Arc::new(InMemoryPaymentLedger::new());
    let inventory = Arc::new(GeneratedShowtimeInventory::new());

    http_serve::start(Arc::new(dotenvy_env), token_store, catalog, ledger, inventory).await?;

    Ok(())
}
