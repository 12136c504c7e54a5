use std::{net::SocketAddr, sync::Arc, time::Duration};

use anyhow::Result;
use axum::{
    Router,
    http::{
        Method,
        header::{AUTHORIZATION, CONTENT_TYPE},
    },
    routing::get,
};
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;

use crate::config::config_model::DotEnvyConfig;
use crate::infrastructure::axum_http::{default_routers, routers};
use crate::infrastructure::catalog::{tmdb_client::TmdbCatalog, token_store::BearerTokenStore};
use crate::infrastructure::memory::{
    payment_ledger::InMemoryPaymentLedger, showtime_inventory::GeneratedShowtimeInventory,
};

pub async fn start(
    config: Arc<DotEnvyConfig>,
    token_store: Arc<BearerTokenStore>,
    catalog: Arc<TmdbCatalog>,
    ledger: Arc<InMemoryPaymentLedger>,
    inventory: Arc<GeneratedShowtimeInventory>,
) -> Result<()> {
    let app = Router::new()
        .fallback(default_routers::not_found)
        .nest("/api/v1/auth", routers::auth::routes(Arc::clone(&token_store)))
        .nest("/api/v1/movies", routers::movies::routes(Arc::clone(&catalog)))
        .nest(
            "/api/v1/bookings",
            routers::bookings::routes(
                Arc::clone(&inventory),
                Arc::clone(&ledger),
                &config.simulation,
            ),
        )
        .nest(
            "/api/v1/payments",
            routers::payments::routes(Arc::clone(&ledger)),
        )
        .nest(
            "/api/v1/publish",
            routers::publish::routes(Arc::clone(&ledger), &config.simulation),
        )
        .route("/api/v1/health-check", get(default_routers::health_check))
        .layer(TimeoutLayer::new(Duration::from_secs(config.server.timeout)))
        .layer(RequestBodyLimitLayer::new(
            (config.server.body_limit * 1024 * 1024).try_into()?,
        ))
        .layer(
            CorsLayer::new()
                .allow_methods([Method::GET, Method::POST])
                .allow_headers([AUTHORIZATION, CONTENT_TYPE])
                .allow_origin(Any),
        )
        .layer(TraceLayer::new_for_http());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    let listener = TcpListener::bind(addr).await?;

    info!("Server is running on port {}", config.server.port);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install CTRL+C signal handler");
    };

    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received ctrl+C signal"),
        _ = terminate => info!("Received terminate signal"),
    }
}
