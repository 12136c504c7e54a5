use std::sync::Arc;
use std::time::Duration;

use axum::http::StatusCode;
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, info, warn};

use crate::config::config_model::Simulation;
use crate::domain::entities::payments::NewPaymentEntity;
use crate::domain::repositories::payment_ledger::PaymentLedger;
use crate::domain::value_objects::enums::payment_statuses::PaymentStatus;
use crate::domain::value_objects::payments::{DEFAULT_USER_ID, PaymentModel};

/// Flat fee recorded for every simulated publish.
const PUBLISH_FEE: f64 = 12.99;

#[derive(Debug, Error)]
pub enum PublishError {
    #[error("date, time and venue are required")]
    MissingField,

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl PublishError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            PublishError::MissingField => StatusCode::BAD_REQUEST,
            PublishError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct VenueModel {
    pub id: String,
    pub name: String,
    pub capacity: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PublishMovieModel {
    pub movie_id: i64,
    pub movie_title: String,
    pub date: String,
    pub time: String,
    pub venue: String,
}

/// Admin-side "publish movie to a venue/time" simulation. The only durable
/// effect is a ledger entry with a weighted-random status.
pub struct PublishUseCase<L>
where
    L: PaymentLedger + Send + Sync + 'static,
{
    ledger: Arc<L>,
    simulation_delay: Duration,
}

impl<L> PublishUseCase<L>
where
    L: PaymentLedger + Send + Sync + 'static,
{
    pub fn new(ledger: Arc<L>, simulation: &Simulation) -> Self {
        Self {
            ledger,
            simulation_delay: Duration::from_millis(simulation.publish_ms),
        }
    }

    pub fn venues(&self) -> Vec<VenueModel> {
        vec![
            VenueModel {
                id: "theater-a".to_string(),
                name: "Theater A".to_string(),
                capacity: 150,
            },
            VenueModel {
                id: "theater-b".to_string(),
                name: "Theater B".to_string(),
                capacity: 200,
            },
            VenueModel {
                id: "theater-c".to_string(),
                name: "Theater C".to_string(),
                capacity: 100,
            },
        ]
    }

    pub async fn publish(&self, request: PublishMovieModel) -> Result<PaymentModel, PublishError> {
        if request.date.trim().is_empty()
            || request.time.trim().is_empty()
            || request.venue.trim().is_empty()
        {
            warn!(
                movie_id = request.movie_id,
                "publish: rejected request with blank fields"
            );
            return Err(PublishError::MissingField);
        }

        info!(
            movie_id = request.movie_id,
            title = %request.movie_title,
            date = %request.date,
            time = %request.time,
            venue = %request.venue,
            "publish: simulating publication"
        );
        tokio::time::sleep(self.simulation_delay).await;

        let recorded = self
            .ledger
            .record(NewPaymentEntity {
                movie_id: request.movie_id,
                user_id: DEFAULT_USER_ID.to_string(),
                amount: PUBLISH_FEE,
                status: draw_publish_status(),
                movie_title: request.movie_title,
            })
            .await
            .map_err(|err| {
                error!(movie_id = request.movie_id, error = ?err, "publish: failed to record fee");
                PublishError::Internal(err)
            })?;

        info!(
            payment_id = %recorded.id,
            status = %recorded.status,
            "publish: fee recorded"
        );
        Ok(PaymentModel::from(recorded))
    }
}

/// Weighted outcome: 70% completed, with the remainder split evenly between
/// pending and failed.
fn draw_publish_status() -> PaymentStatus {
    let mut rng = rand::thread_rng();
    if rng.r#gen::<f64>() > 0.3 {
        PaymentStatus::Completed
    } else if rng.r#gen::<f64>() > 0.5 {
        PaymentStatus::Pending
    } else {
        PaymentStatus::Failed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::payments::PaymentEntity;
    use crate::domain::repositories::payment_ledger::MockPaymentLedger;

    fn zero_delays() -> Simulation {
        Simulation {
            payment_processing_ms: 0,
            payment_confirmation_ms: 0,
            publish_ms: 0,
        }
    }

    fn sample_request() -> PublishMovieModel {
        PublishMovieModel {
            movie_id: 603,
            movie_title: "The Matrix".to_string(),
            date: "2026-08-10".to_string(),
            time: "20:30".to_string(),
            venue: "theater-a".to_string(),
        }
    }

    #[tokio::test]
    async fn publishing_records_the_flat_fee() {
        let mut ledger = MockPaymentLedger::new();
        ledger.expect_record().times(1).returning(|new_payment| {
            Ok(PaymentEntity::record_now(new_payment))
        });

        let usecase = PublishUseCase::new(Arc::new(ledger), &zero_delays());
        let payment = usecase.publish(sample_request()).await.unwrap();

        assert_eq!(payment.movie_id, 603);
        assert_eq!(payment.user_id, DEFAULT_USER_ID);
        assert_eq!(payment.amount, PUBLISH_FEE);
        assert_eq!(payment.movie_title, "The Matrix");
        assert!(matches!(
            payment.status,
            PaymentStatus::Completed | PaymentStatus::Pending | PaymentStatus::Failed
        ));
    }

    #[tokio::test]
    async fn blank_fields_are_rejected_before_any_ledger_write() {
        // No `record` expectation: a stray write fails the test.
        let usecase = PublishUseCase::new(Arc::new(MockPaymentLedger::new()), &zero_delays());

        let request = PublishMovieModel {
            venue: "   ".to_string(),
            ..sample_request()
        };
        let err = usecase.publish(request).await.unwrap_err();

        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn venue_list_is_fixed() {
        let usecase = PublishUseCase::new(Arc::new(MockPaymentLedger::new()), &zero_delays());
        let venues = usecase.venues();

        assert_eq!(venues.len(), 3);
        assert_eq!(venues[0].id, "theater-a");
        assert_eq!(venues[0].capacity, 150);
        assert_eq!(venues[1].capacity, 200);
        assert_eq!(venues[2].capacity, 100);
    }
}
