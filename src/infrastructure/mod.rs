pub mod axum_http;
pub mod catalog;
pub mod memory;
