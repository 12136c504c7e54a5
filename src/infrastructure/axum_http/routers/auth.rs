use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};

use crate::infrastructure::axum_http::error_responses;
use crate::infrastructure::catalog::token_store::BearerTokenStore;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub token: String,
}

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub authenticated: bool,
}

pub fn routes(token_store: Arc<BearerTokenStore>) -> Router {
    Router::new()
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/session", get(session))
        .with_state(token_store)
}

pub async fn login(
    State(token_store): State<Arc<BearerTokenStore>>,
    Json(request): Json<LoginRequest>,
) -> impl IntoResponse {
    if !token_store.set(request.token).await {
        return error_responses::error_response(
            StatusCode::BAD_REQUEST,
            "A non-empty bearer token is required",
        );
    }

    (
        StatusCode::OK,
        Json(SessionResponse {
            authenticated: true,
        }),
    )
        .into_response()
}

pub async fn logout(State(token_store): State<Arc<BearerTokenStore>>) -> impl IntoResponse {
    token_store.clear().await;
    (
        StatusCode::OK,
        Json(SessionResponse {
            authenticated: false,
        }),
    )
        .into_response()
}

pub async fn session(State(token_store): State<Arc<BearerTokenStore>>) -> impl IntoResponse {
    Json(SessionResponse {
        authenticated: token_store.is_authenticated().await,
    })
}
