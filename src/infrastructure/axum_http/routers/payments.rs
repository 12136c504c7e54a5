use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Deserialize;

use crate::application::usercases::payments_dashboard::PaymentsDashboardUseCase;
use crate::domain::repositories::payment_ledger::PaymentLedger;
use crate::domain::value_objects::enums::{
    date_windows::DateWindow, payment_status_filters::PaymentStatusFilter,
};
use crate::domain::value_objects::payments::PaymentListFilter;
use crate::domain::value_objects::sorting::SortKey;
use crate::infrastructure::axum_http::error_responses;
use crate::infrastructure::memory::payment_ledger::InMemoryPaymentLedger;

#[derive(Debug, Deserialize)]
pub struct PaymentsQuery {
    pub status: Option<String>,
    pub search: Option<String>,
    pub date_range: Option<String>,
    pub sort_by: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct StatsQuery {
    pub status: Option<String>,
}

pub fn routes(ledger: Arc<InMemoryPaymentLedger>) -> Router {
    let payments_dashboard_usecase = PaymentsDashboardUseCase::new(ledger);

    Router::new()
        .route("/", get(list_payments::<InMemoryPaymentLedger>))
        .route("/stats", get(stats::<InMemoryPaymentLedger>))
        .route("/export", get(export::<InMemoryPaymentLedger>))
        .route("/movie/:movie_id", get(payments_for_movie::<InMemoryPaymentLedger>))
        .route("/user/:user_id", get(payments_for_user::<InMemoryPaymentLedger>))
        .with_state(Arc::new(payments_dashboard_usecase))
}

fn parse_filter(query: PaymentsQuery) -> Result<PaymentListFilter, String> {
    let mut filter = PaymentListFilter::default();

    if let Some(status) = query.status.as_deref() {
        filter.status = PaymentStatusFilter::from_str(status)
            .ok_or_else(|| format!("Invalid status filter: {}", status))?;
    }
    if let Some(date_range) = query.date_range.as_deref() {
        filter.date_window = DateWindow::from_str(date_range)
            .ok_or_else(|| format!("Invalid date range: {}", date_range))?;
    }
    if let Some(sort_by) = query.sort_by.as_deref() {
        filter.sort_by =
            SortKey::parse(sort_by).ok_or_else(|| format!("Invalid sort key: {}", sort_by))?;
    }
    filter.search = query.search;

    Ok(filter)
}

pub async fn list_payments<L>(
    State(payments_dashboard_usecase): State<Arc<PaymentsDashboardUseCase<L>>>,
    Query(query): Query<PaymentsQuery>,
) -> impl IntoResponse
where
    L: PaymentLedger + Send + Sync + 'static,
{
    let filter = match parse_filter(query) {
        Ok(filter) => filter,
        Err(message) => return error_responses::error_response(StatusCode::BAD_REQUEST, message),
    };

    match payments_dashboard_usecase.list(&filter).await {
        Ok(payments) => Json(payments).into_response(),
        Err(err) => error_responses::usecase_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            err,
            "payments: failed to list ledger view",
        ),
    }
}

pub async fn stats<L>(
    State(payments_dashboard_usecase): State<Arc<PaymentsDashboardUseCase<L>>>,
    Query(query): Query<StatsQuery>,
) -> impl IntoResponse
where
    L: PaymentLedger + Send + Sync + 'static,
{
    let status = match query.status.as_deref() {
        Some(raw) => match PaymentStatusFilter::from_str(raw) {
            Some(status) => status,
            None => {
                return error_responses::error_response(
                    StatusCode::BAD_REQUEST,
                    format!("Invalid status filter: {}", raw),
                );
            }
        },
        None => PaymentStatusFilter::All,
    };

    match payments_dashboard_usecase.stats(status).await {
        Ok(stats) => Json(stats).into_response(),
        Err(err) => error_responses::usecase_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            err,
            "payments: failed to compute stats",
        ),
    }
}

pub async fn export<L>(
    State(payments_dashboard_usecase): State<Arc<PaymentsDashboardUseCase<L>>>,
    Query(query): Query<PaymentsQuery>,
) -> impl IntoResponse
where
    L: PaymentLedger + Send + Sync + 'static,
{
    let filter = match parse_filter(query) {
        Ok(filter) => filter,
        Err(message) => return error_responses::error_response(StatusCode::BAD_REQUEST, message),
    };

    match payments_dashboard_usecase.export(&filter).await {
        Ok(export) => csv_response(export.filename, export.content),
        Err(err) => error_responses::usecase_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            err,
            "payments: failed to export csv",
        ),
    }
}

pub async fn payments_for_movie<L>(
    State(payments_dashboard_usecase): State<Arc<PaymentsDashboardUseCase<L>>>,
    Path(movie_id): Path<i64>,
) -> impl IntoResponse
where
    L: PaymentLedger + Send + Sync + 'static,
{
    match payments_dashboard_usecase.payments_for_movie(movie_id).await {
        Ok(payments) => Json(payments).into_response(),
        Err(err) => error_responses::usecase_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            err,
            "payments: failed to list by movie",
        ),
    }
}

pub async fn payments_for_user<L>(
    State(payments_dashboard_usecase): State<Arc<PaymentsDashboardUseCase<L>>>,
    Path(user_id): Path<String>,
) -> impl IntoResponse
where
    L: PaymentLedger + Send + Sync + 'static,
{
    match payments_dashboard_usecase.payments_for_user(&user_id).await {
        Ok(payments) => Json(payments).into_response(),
        Err(err) => error_responses::usecase_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            err,
            "payments: failed to list by user",
        ),
    }
}

fn csv_response(filename: String, content: String) -> Response {
    (
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", filename),
            ),
        ],
        content,
    )
        .into_response()
}
