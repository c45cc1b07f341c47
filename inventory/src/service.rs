use std::sync::Arc;
use std::time::Duration;

use corelib::models::{AvailabilitySnapshot, ReservationOutcome, ReservationRequest};
use tracing::instrument;

use crate::error::InventoryError;
use crate::stock_cell::StockCell;

/// The domain API over a Stock Cell: validates input, delegates the
/// atomic decision, and shapes the result into wire types. Recovers
/// nothing — it validates and acts.
pub struct InventoryService {
    cell: StockCell,
}

impl InventoryService {
    pub fn new(initial_stock: u64, cache_ttl: Duration) -> Self {
        Self {
            cell: StockCell::new(initial_stock, cache_ttl),
        }
    }

    pub fn shared(initial_stock: u64, cache_ttl: Duration) -> Arc<Self> {
        Arc::new(Self::new(initial_stock, cache_ttl))
    }

    #[instrument(skip(self), fields(qty = request.qty))]
    pub fn reserve(
        &self,
        request: ReservationRequest,
    ) -> Result<ReservationOutcome, InventoryError> {
        if request.qty <= 0 {
            return Err(InventoryError::InvalidQuantity(format!(
                "qty must be > 0, got {}",
                request.qty
            )));
        }

        // Request.qty was checked positive above; safe to use as u64.
        let qty = request.qty as u64;
        let (accepted, remaining) = self.cell.try_decrement(qty)?;

        Ok(if accepted {
            ReservationOutcome::accepted(remaining, format!("reserved {qty}"))
        } else {
            ReservationOutcome::rejected(remaining, "insufficient inventory")
        })
    }

    pub fn available(&self) -> AvailabilitySnapshot {
        AvailabilitySnapshot::new(self.cell.snapshot())
    }
}
