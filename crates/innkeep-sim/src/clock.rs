use chrono::{DateTime, Duration, Utc};
use std::sync::{Arc, Mutex};

use innkeep_core::store::Clock;

/// A pinned, manually advanced clock for deterministic runs.
///
/// Clones share the same instant, so a harness can hold one handle while
/// the store holds another.
#[derive(Debug, Clone)]
pub struct SimClock {
    now: Arc<Mutex<DateTime<Utc>>>,
}

impl SimClock {
    #[must_use]
    pub fn at(now: DateTime<Utc>) -> Self {
        Self {
            now: Arc::new(Mutex::new(now)),
        }
    }

    /// Move time forward.
    pub fn advance(&self, by: Duration) {
        let mut guard = self.now.lock().expect("sim clock poisoned");
        *guard += by;
    }
}

impl Clock for SimClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().expect("sim clock poisoned")
    }
}

#[cfg(test)]
mod tests {
    use super::SimClock;
    use chrono::{Duration, TimeZone, Utc};
    use innkeep_core::store::Clock;

    #[test]
    fn clones_share_the_instant() {
        let base = Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).single().expect("valid date");
        let clock = SimClock::at(base);
        let handle = clock.clone();

        clock.advance(Duration::hours(3));
        assert_eq!(handle.now(), base + Duration::hours(3));
    }
}
