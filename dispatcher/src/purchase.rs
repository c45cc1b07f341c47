use std::sync::Arc;

use corelib::models::{ReservationOutcome, ReservationRequest};
use tracing::instrument;
use vacancy::VacancyClient;

use crate::error::DispatchError;

/// The purchase pipeline. Stateless, holds no state across requests;
/// tie-breaking among concurrent reservations is entirely delegated to
/// whatever is behind the Vacancy Client.
///
/// Known sharp edge: there is no idempotency key here. A client that
/// retries `purchase` after a `DeadlineExceeded` may end up with two
/// reservations or none — deliberate, not a bug to fix in this layer.
pub struct ReservationDispatcher {
    client: Arc<dyn VacancyClient>,
}

impl ReservationDispatcher {
    pub fn new(client: Arc<dyn VacancyClient>) -> Self {
        Self { client }
    }

    #[instrument(skip(self), fields(qty = request.qty))]
    pub async fn purchase(
        &self,
        request: ReservationRequest,
    ) -> Result<ReservationOutcome, DispatchError> {
        if request.qty <= 0 {
            return Err(DispatchError::InvalidQuantity(format!(
                "qty must be > 0, got {}",
                request.qty
            )));
        }

        let outcome = self.client.reserve(request).await?;

        Ok(if outcome.accepted {
            ReservationOutcome::accepted(outcome.remaining, "purchase successful")
        } else {
            ReservationOutcome::rejected(outcome.remaining, "insufficient inventory")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use corelib::models::AvailabilitySnapshot;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use vacancy::VacancyError;

    struct FakeClient {
        outcome: Result<ReservationOutcome, &'static str>,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl VacancyClient for FakeClient {
        async fn reserve(
            &self,
            _request: ReservationRequest,
        ) -> Result<ReservationOutcome, VacancyError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.outcome {
                Ok(o) => Ok(o.clone()),
                Err("transport") => Err(VacancyError::PeerStatus {
                    status: 500,
                    detail: "boom".into(),
                }),
                Err("deadline") => Err(VacancyError::DeadlineExceeded),
                Err(_) => unreachable!(),
            }
        }

        async fn available(&self) -> Result<AvailabilitySnapshot, VacancyError> {
            unimplemented!()
        }
    }

    fn dispatcher(outcome: Result<ReservationOutcome, &'static str>) -> ReservationDispatcher {
        ReservationDispatcher::new(Arc::new(FakeClient {
            outcome,
            calls: AtomicUsize::new(0),
        }))
    }

    #[tokio::test]
    async fn accepted_reservation_yields_purchase_successful_message() {
        let d = dispatcher(Ok(ReservationOutcome::accepted(5, "reserved 1")));
        let out = d.purchase(ReservationRequest::new(1)).await.unwrap();
        assert!(out.accepted);
        assert_eq!(out.remaining, 5);
        assert_eq!(out.message, "purchase successful");
    }

    #[tokio::test]
    async fn rejected_reservation_echoes_remaining_with_insufficient_inventory() {
        let d = dispatcher(Ok(ReservationOutcome::rejected(0, "insufficient inventory")));
        let out = d.purchase(ReservationRequest::new(1)).await.unwrap();
        assert!(!out.accepted);
        assert_eq!(out.remaining, 0);
        assert_eq!(out.message, "insufficient inventory");
    }

    #[tokio::test]
    async fn invalid_quantity_never_reaches_the_vacancy_client() {
        let client = Arc::new(FakeClient {
            outcome: Ok(ReservationOutcome::accepted(0, "unused")),
            calls: AtomicUsize::new(0),
        });
        let d = ReservationDispatcher::new(client.clone());

        let err = d.purchase(ReservationRequest::new(0)).await.unwrap_err();
        assert!(matches!(err, DispatchError::InvalidQuantity(_)));
        assert_eq!(client.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn transport_failure_classifies_as_upstream_unavailable() {
        let d = dispatcher(Err("transport"));
        let err = d.purchase(ReservationRequest::new(1)).await.unwrap_err();
        assert!(matches!(err, DispatchError::UpstreamUnavailable(_)));
    }

    #[tokio::test]
    async fn deadline_exceeded_classifies_distinctly() {
        let d = dispatcher(Err("deadline"));
        let err = d.purchase(ReservationRequest::new(1)).await.unwrap_err();
        assert!(matches!(err, DispatchError::DeadlineExceeded));
    }
}
