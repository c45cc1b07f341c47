//! The Dual-Transport Adapter: one capability trait, two implementations.
//!
//! `LocalVacancyClient` calls an in-process `InventoryService` directly.
//! `RemoteVacancyClient` calls a peer's inventory HTTP endpoints over a
//! pooled, bounded, timed-out transport. The Dispatcher depends only on
//! `VacancyClient` and never observes which variant it has.

pub mod client;
pub mod error;
pub mod factory;
pub mod local;
pub mod remote;

pub use client::VacancyClient;
pub use error::VacancyError;
pub use factory::{VacancyTarget, build_vacancy_client};
pub use local::LocalVacancyClient;
pub use remote::{RemoteVacancyClient, RemoteVacancyConfig};
