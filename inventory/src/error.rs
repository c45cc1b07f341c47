use thiserror::Error;

/// Errors raised by the Stock Cell / Inventory Service. Distinct from
/// `InsufficientInventory`, which is a normal `ReservationOutcome`, not an
/// error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InventoryError {
    /// `quantity` was missing, non-positive, or otherwise violated the
    /// caller's precondition. A programming / client-input error, never
    /// silently clamped.
    #[error("invalid quantity: {0}")]
    InvalidQuantity(String),
}
