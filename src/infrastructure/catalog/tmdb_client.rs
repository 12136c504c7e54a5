use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use tracing::{error, warn};
use url::Url;

use crate::config::config_model::Catalog as CatalogConfig;
use crate::domain::repositories::movie_catalog::{CatalogError, MovieCatalog};
use crate::domain::value_objects::movies::MoviePage;
use crate::infrastructure::catalog::token_store::BearerTokenStore;

/// TMDB-shaped catalog client built on reqwest. Every request carries the
/// stored bearer token; without one the request is never attempted.
pub struct TmdbCatalog {
    http: reqwest::Client,
    base_url: String,
    image_base_url: String,
    token_store: Arc<BearerTokenStore>,
    max_retries: u32,
}

impl TmdbCatalog {
    pub fn new(config: &CatalogConfig, token_store: Arc<BearerTokenStore>) -> Result<Self> {
        // Catch malformed endpoint configuration at startup, not on the
        // first request.
        Url::parse(&config.base_url)?;
        Url::parse(&config.image_base_url)?;

        Ok(Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            image_base_url: config.image_base_url.trim_end_matches('/').to_string(),
            token_store,
            max_retries: config.max_retries,
        })
    }

    /// One authenticated page fetch. Transport failures are retried up to
    /// the configured budget; a non-success status is terminal and is not
    /// inspected further.
    async fn fetch_page(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<MoviePage, CatalogError> {
        let token = self
            .token_store
            .current()
            .await
            .ok_or(CatalogError::MissingCredential)?;

        let url = format!("{}/{}", self.base_url, path);
        let mut attempt = 0;

        loop {
            let sent = self
                .http
                .get(&url)
                .bearer_auth(&token)
                .header(CONTENT_TYPE, "application/json")
                .query(query)
                .send()
                .await;

            match sent {
                Ok(response) if response.status().is_success() => {
                    return response.json::<MoviePage>().await.map_err(|err| {
                        error!(%url, error = %err, "catalog: failed to decode page envelope");
                        CatalogError::FetchFailed
                    });
                }
                Ok(response) => {
                    error!(%url, status = %response.status(), "catalog: upstream returned an error");
                    return Err(CatalogError::FetchFailed);
                }
                Err(err) if attempt < self.max_retries => {
                    attempt += 1;
                    warn!(%url, attempt, error = %err, "catalog: transport error, retrying");
                }
                Err(err) => {
                    error!(%url, error = %err, "catalog: transport retries exhausted");
                    return Err(CatalogError::FetchFailed);
                }
            }
        }
    }
}

#[async_trait]
impl MovieCatalog for TmdbCatalog {
    async fn now_playing(&self, page: u32) -> Result<MoviePage, CatalogError> {
        self.fetch_page("movie/now_playing", &[("page", page.to_string())])
            .await
    }

    async fn search(&self, query: &str, page: u32) -> Result<MoviePage, CatalogError> {
        self.fetch_page(
            "search/movie",
            &[("query", query.to_string()), ("page", page.to_string())],
        )
        .await
    }

    fn poster_url(&self, poster_path: &str, size: &str) -> String {
        format!("{}/{}{}", self.image_base_url, size, poster_path)
    }
}
