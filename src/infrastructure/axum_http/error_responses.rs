use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: u16,
    pub message: String,
}

pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    let body = Json(ErrorResponse {
        code: status.as_u16(),
        message: message.into(),
    });
    (status, body).into_response()
}

/// Maps a usecase error onto the wire. Client errors carry their message;
/// server errors are logged and masked so internals never leak.
pub fn usecase_error(
    status: StatusCode,
    err: impl std::fmt::Display,
    context: &str,
) -> Response {
    if status.is_server_error() {
        error!(error = %err, "{}", context);
        return error_response(status, "Internal server error");
    }
    error_response(status, err.to_string())
}
