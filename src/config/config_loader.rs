use anyhow::{Ok, Result};

use super::config_model::{Catalog, DotEnvyConfig, Server, Simulation};

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

pub fn load() -> Result<DotEnvyConfig> {
    dotenvy::dotenv().ok();

    let server = Server {
        port: env_or("SERVER_PORT", "3000").parse()?,
        body_limit: env_or("SERVER_BODY_LIMIT", "10").parse()?,
        timeout: env_or("SERVER_TIMEOUT", "90").parse()?,
    };

    let catalog = Catalog {
        base_url: env_or("CATALOG_BASE_URL", "https://api.themoviedb.org/3"),
        image_base_url: env_or("CATALOG_IMAGE_BASE_URL", "https://image.tmdb.org/t/p"),
        bearer_token: std::env::var("CATALOG_BEARER_TOKEN")
            .ok()
            .filter(|token| !token.trim().is_empty()),
        max_retries: env_or("CATALOG_MAX_RETRIES", "3").parse()?,
    };

    let simulation = Simulation {
        payment_processing_ms: env_or("PAYMENT_PROCESSING_MS", "3000").parse()?,
        payment_confirmation_ms: env_or("PAYMENT_CONFIRMATION_MS", "3000").parse()?,
        publish_ms: env_or("PUBLISH_SIMULATION_MS", "1000").parse()?,
    };

    Ok(DotEnvyConfig {
        server,
        catalog,
        simulation,
    })
}
