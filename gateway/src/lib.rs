//! HTTP Surface: framing only. All semantic validation lives in the
//! Dispatcher and Inventory Service; handlers here just decode bodies,
//! call the domain layer, and map results onto the external wire shapes.

pub mod app;
pub mod error_response;
pub mod health;
pub mod inventory_routes;
pub mod purchase_routes;

pub use app::{build_combined_router, build_inventory_router, build_purchase_router};
