use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};

use axum::http::StatusCode;
use thiserror::Error;
use tracing::{error, info, warn};

use crate::domain::entities::movies::MovieEntity;
use crate::domain::repositories::movie_catalog::{CatalogError, MovieCatalog};
use crate::domain::value_objects::movies::{
    ListMoviesFilter, MovieDto, MoviePageModel,
};
use crate::domain::value_objects::sorting::SortKey;

const POSTER_SIZE: &str = "w500";

#[derive(Debug, Error)]
pub enum MovieListingError {
    #[error("authentication token is required")]
    MissingCredential,

    #[error("failed to fetch from the movie catalog")]
    CatalogUnavailable,
}

impl MovieListingError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            MovieListingError::MissingCredential => StatusCode::UNAUTHORIZED,
            MovieListingError::CatalogUnavailable => StatusCode::BAD_GATEWAY,
        }
    }
}

pub type ListingResult<T> = std::result::Result<T, MovieListingError>;

/// Paginates, searches and sorts catalog pages. Sorting spans the current
/// page only, and the upper pagination bound is whatever the catalog
/// reported most recently (last write wins on racing requests).
pub struct MovieListingUseCase<C>
where
    C: MovieCatalog + Send + Sync + 'static,
{
    catalog: Arc<C>,
    last_total_pages: AtomicU32,
    loading: AtomicBool,
}

impl<C> MovieListingUseCase<C>
where
    C: MovieCatalog + Send + Sync + 'static,
{
    pub fn new(catalog: Arc<C>) -> Self {
        Self {
            catalog,
            last_total_pages: AtomicU32::new(0),
            loading: AtomicBool::new(false),
        }
    }

    /// True while a catalog fetch is outstanding. Stale data from the
    /// previous page stays visible to callers until the new fetch resolves.
    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }

    pub async fn list(&self, filter: ListMoviesFilter) -> ListingResult<MoviePageModel> {
        let page = self.clamp_page(filter.page);
        let query = filter
            .query
            .as_deref()
            .map(str::trim)
            .filter(|query| !query.is_empty());

        info!(page, query = query.unwrap_or(""), "movies: listing requested");

        self.loading.store(true, Ordering::SeqCst);
        let fetched = match query {
            Some(query) => self.catalog.search(query, page).await,
            None => self.catalog.now_playing(page).await,
        };
        self.loading.store(false, Ordering::SeqCst);

        let envelope = fetched.map_err(|err| match err {
            CatalogError::MissingCredential => {
                warn!(page, "movies: listing attempted without a token");
                MovieListingError::MissingCredential
            }
            CatalogError::FetchFailed => {
                error!(page, "movies: catalog fetch failed");
                MovieListingError::CatalogUnavailable
            }
        })?;

        self.last_total_pages
            .store(envelope.total_pages.max(1), Ordering::SeqCst);

        let mut movies = envelope.results;
        if let Some(sort_by) = &filter.sort_by {
            sort_movies(&mut movies, sort_by);
        }

        let results = movies
            .into_iter()
            .map(|movie| {
                let poster_url = movie
                    .poster_path
                    .as_deref()
                    .map(|path| self.catalog.poster_url(path, POSTER_SIZE));
                MovieDto::from_entity(movie, poster_url)
            })
            .collect();

        Ok(MoviePageModel {
            page: envelope.page,
            results,
            total_pages: envelope.total_pages,
            total_results: envelope.total_results,
        })
    }

    /// Pages are clamped low to 1 and high to the most recently observed
    /// page count, so an out-of-range ask never reaches the catalog.
    fn clamp_page(&self, requested: u32) -> u32 {
        let page = requested.max(1);
        match self.last_total_pages.load(Ordering::SeqCst) {
            0 => page,
            known => page.min(known),
        }
    }
}

/// In-memory sort of one page by a `field.order` key. Date-like fields are
/// promoted to calendar time before comparing. Ties break arbitrarily;
/// unknown fields leave the page untouched.
fn sort_movies(movies: &mut [MovieEntity], sort_by: &SortKey) {
    match sort_by.field.as_str() {
        "title" => movies.sort_unstable_by(|a, b| sort_by.order.apply(a.title.cmp(&b.title))),
        "release_date" => movies.sort_unstable_by(|a, b| {
            sort_by
                .order
                .apply(a.released_on().cmp(&b.released_on()))
        }),
        "vote_average" => movies.sort_unstable_by(|a, b| {
            sort_by
                .order
                .apply(a.vote_average.total_cmp(&b.vote_average))
        }),
        "popularity" => movies
            .sort_unstable_by(|a, b| sort_by.order.apply(a.popularity.total_cmp(&b.popularity))),
        _ => {}
    }
}
