use std::sync::Arc;

use async_trait::async_trait;
use corelib::models::{AvailabilitySnapshot, ReservationOutcome, ReservationRequest};
use inventory_engine::{InventoryError, InventoryService};
use tracing::instrument;

use crate::client::VacancyClient;
use crate::error::VacancyError;

/// Holds a direct reference to the Inventory Service in the same process.
/// Operations are plain function calls; no suspension beyond what the
/// Inventory Service itself imposes. Failures bubble up directly.
pub struct LocalVacancyClient {
    service: Arc<InventoryService>,
}

impl LocalVacancyClient {
    pub fn new(service: Arc<InventoryService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl VacancyClient for LocalVacancyClient {
    #[instrument(skip(self), fields(qty = request.qty))]
    async fn reserve(
        &self,
        request: ReservationRequest,
    ) -> Result<ReservationOutcome, VacancyError> {
        self.service.reserve(request).map_err(map_inventory_error)
    }

    async fn available(&self) -> Result<AvailabilitySnapshot, VacancyError> {
        Ok(self.service.available())
    }
}

fn map_inventory_error(err: InventoryError) -> VacancyError {
    match err {
        InventoryError::InvalidQuantity(detail) => VacancyError::Invalid(detail),
    }
}
