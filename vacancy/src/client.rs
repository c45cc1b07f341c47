use async_trait::async_trait;
use corelib::models::{AvailabilitySnapshot, ReservationOutcome, ReservationRequest};

use crate::error::VacancyError;

/// The indirection that makes the Dispatcher topology-agnostic. Both
/// variants implement operations with contracts identical to the
/// Inventory Service's `reserve` and `available`.
#[async_trait]
pub trait VacancyClient: Send + Sync + 'static {
    async fn reserve(&self, request: ReservationRequest)
    -> Result<ReservationOutcome, VacancyError>;

    async fn available(&self) -> Result<AvailabilitySnapshot, VacancyError>;
}
