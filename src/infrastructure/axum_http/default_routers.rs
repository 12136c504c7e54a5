use axum::{http::StatusCode, response::IntoResponse};

use crate::infrastructure::axum_http::error_responses;

pub async fn not_found() -> impl IntoResponse {
    error_responses::error_response(StatusCode::NOT_FOUND, "Resource not found")
}

pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK").into_response()
}
