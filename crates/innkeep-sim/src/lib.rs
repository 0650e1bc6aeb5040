#![forbid(unsafe_code)]
//! innkeep-sim: deterministic demo scenarios for the ticket store.
//!
//! # Conventions
//!
//! - **Errors**: the store's typed `StoreError` propagates unchanged.
//! - **Logging**: `tracing` macros (`info!`, `warn!`, `debug!`).

pub mod clock;
pub mod scenario;

pub use clock::SimClock;
pub use scenario::{run, Scenario};
