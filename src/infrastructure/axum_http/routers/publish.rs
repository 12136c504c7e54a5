use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    response::IntoResponse,
    routing::{get, post},
};

use crate::application::usercases::publish::{PublishMovieModel, PublishUseCase};
use crate::config::config_model::Simulation;
use crate::domain::repositories::payment_ledger::PaymentLedger;
use crate::infrastructure::axum_http::error_responses;
use crate::infrastructure::memory::payment_ledger::InMemoryPaymentLedger;

pub fn routes(ledger: Arc<InMemoryPaymentLedger>, simulation: &Simulation) -> Router {
    let publish_usecase = PublishUseCase::new(ledger, simulation);

    Router::new()
        .route("/", post(publish_movie::<InMemoryPaymentLedger>))
        .route("/venues", get(list_venues::<InMemoryPaymentLedger>))
        .with_state(Arc::new(publish_usecase))
}

pub async fn list_venues<L>(
    State(publish_usecase): State<Arc<PublishUseCase<L>>>,
) -> impl IntoResponse
where
    L: PaymentLedger + Send + Sync + 'static,
{
    Json(publish_usecase.venues())
}

pub async fn publish_movie<L>(
    State(publish_usecase): State<Arc<PublishUseCase<L>>>,
    Json(request): Json<PublishMovieModel>,
) -> impl IntoResponse
where
    L: PaymentLedger + Send + Sync + 'static,
{
    match publish_usecase.publish(request).await {
        Ok(payment) => Json(payment).into_response(),
        Err(err) => {
            error_responses::usecase_error(err.status_code(), err, "publish: request failed")
        }
    }
}
