//! Wire and domain types shared across the ticket-reservation workspace.
//!
//! Kept deliberately small: this crate carries no behavior, only the data
//! shapes that cross crate (and process) boundaries, so that every layer
//! — Stock Cell, Vacancy Client, Dispatcher, HTTP Surface — agrees on one
//! definition.

pub mod error;
pub mod mode;
pub mod models;
