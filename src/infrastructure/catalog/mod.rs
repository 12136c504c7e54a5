pub mod tmdb_client;
pub mod token_store;
