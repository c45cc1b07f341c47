//! The Inventory Engine: an atomic counter with a read-through cache, and
//! the domain service wrapping it.
//!
//! Everything in this crate runs in a single process and touches no I/O;
//! the only shared mutable state is the Stock Cell's mutex, held for O(1)
//! work per call.

pub mod error;
pub mod service;
pub mod stock_cell;

pub use error::InventoryError;
pub use service::InventoryService;
pub use stock_cell::StockCell;
