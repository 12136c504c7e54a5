use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use serde::Deserialize;

use crate::application::usercases::movie_listing::MovieListingUseCase;
use crate::domain::repositories::movie_catalog::MovieCatalog;
use crate::domain::value_objects::movies::ListMoviesFilter;
use crate::domain::value_objects::sorting::SortKey;
use crate::infrastructure::axum_http::error_responses;
use crate::infrastructure::catalog::tmdb_client::TmdbCatalog;

#[derive(Debug, Deserialize)]
pub struct ListMoviesQuery {
    pub page: Option<u32>,
    pub query: Option<String>,
    pub sort_by: Option<String>,
}

pub fn routes(catalog: Arc<TmdbCatalog>) -> Router {
    let movie_listing_usecase = MovieListingUseCase::new(catalog);

    Router::new()
        .route("/", get(list_movies::<TmdbCatalog>))
        .with_state(Arc::new(movie_listing_usecase))
}

pub async fn list_movies<C>(
    State(movie_listing_usecase): State<Arc<MovieListingUseCase<C>>>,
    Query(query): Query<ListMoviesQuery>,
) -> impl IntoResponse
where
    C: MovieCatalog + Send + Sync + 'static,
{
    let sort_by = match query.sort_by.as_deref() {
        Some(raw) => match SortKey::parse(raw) {
            Some(sort_by) => Some(sort_by),
            None => {
                return error_responses::error_response(
                    StatusCode::BAD_REQUEST,
                    format!("Invalid sort key: {}", raw),
                );
            }
        },
        None => None,
    };

    let filter = ListMoviesFilter {
        page: query.page.unwrap_or(1),
        query: query.query,
        sort_by,
    };

    match movie_listing_usecase.list(filter).await {
        Ok(page) => Json(page).into_response(),
        Err(err) => error_responses::usecase_error(
            err.status_code(),
            err,
            "movies: listing request failed",
        ),
    }
}
