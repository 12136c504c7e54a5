use serde::{Deserialize, Serialize};

use crate::domain::entities::movies::MovieEntity;
use crate::domain::value_objects::sorting::SortKey;

/// Page envelope as delivered by the catalog's listing and search endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MoviePage {
    pub page: u32,
    pub results: Vec<MovieEntity>,
    pub total_pages: u32,
    pub total_results: u32,
}

#[derive(Debug, Clone, Default)]
pub struct ListMoviesFilter {
    pub page: u32,
    pub query: Option<String>,
    pub sort_by: Option<SortKey>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MovieDto {
    pub id: i64,
    pub title: String,
    pub overview: String,
    pub release_date: String,
    pub poster_path: Option<String>,
    pub poster_url: Option<String>,
    pub vote_average: f64,
    pub popularity: f64,
    pub adult: bool,
}

impl MovieDto {
    pub fn from_entity(movie: MovieEntity, poster_url: Option<String>) -> Self {
        Self {
            id: movie.id,
            title: movie.title,
            overview: movie.overview,
            release_date: movie.release_date,
            poster_path: movie.poster_path,
            poster_url,
            vote_average: movie.vote_average,
            popularity: movie.popularity,
            adult: movie.adult,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MoviePageModel {
    pub page: u32,
    pub results: Vec<MovieDto>,
    pub total_pages: u32,
    pub total_results: u32,
}
