#![forbid(unsafe_code)]
//! innkeep-triage: decision-support analytics derived from the live ticket
//! collection.
//!
//! Everything here is recomputed from the collection on every read; there
//! is no incremental maintenance. The collection tops out at a few dozen
//! records, so full scans are the simplest correct approach.

pub mod kpi;
pub mod rank;
pub mod recurrence;
pub mod report;
pub mod rooms;

pub use recurrence::RecurrenceIndex;
pub use report::TriageReport;
