#![forbid(unsafe_code)]
//! innkeep-core: ticket model, lifecycle rules, priority scoring, and the
//! snapshot-backed ticket store.
//!
//! # Conventions
//!
//! - **Errors**: typed [`error::StoreError`] inside the store;
//!   `anyhow::Result` at I/O boundaries.
//! - **Logging**: `tracing` macros (`info!`, `warn!`, `error!`, `debug!`).

pub mod config;
pub mod error;
pub mod export;
pub mod model;
pub mod priority;
pub mod store;
