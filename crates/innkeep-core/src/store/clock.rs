use chrono::{DateTime, Utc};

/// Source of "now" for the store.
///
/// The store recomputes priority scores and stamps audit events from this
/// clock; injecting it keeps scoring and lifecycle behavior testable and
/// lets the scenario harness pin time.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
