use async_trait::async_trait;
use mockall::automock;
use thiserror::Error;

use crate::domain::value_objects::movies::MoviePage;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// No bearer token is held; the request must not be attempted.
    #[error("authentication token is required")]
    MissingCredential,

    /// Non-success upstream status or exhausted transport retries. 4xx and
    /// 5xx are deliberately not distinguished.
    #[error("failed to fetch from the movie catalog")]
    FetchFailed,
}

/// Read-only client of the external movie catalog.
#[automock]
#[async_trait]
pub trait MovieCatalog {
    async fn now_playing(&self, page: u32) -> Result<MoviePage, CatalogError>;

    async fn search(&self, query: &str, page: u32) -> Result<MoviePage, CatalogError>;

    /// Absolute poster CDN URL for a catalog poster path and size token.
    fn poster_url(&self, poster_path: &str, size: &str) -> String;
}
