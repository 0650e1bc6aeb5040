//! Heuristic priority scoring for open tickets.
//!
//! The score ranks non-terminal tickets for attention. It is a plain
//! weighted sum, not a scheduling algorithm: urgency and impact dominate,
//! occupancy adds a fixed bump, and age accrues points up to a cap.

use chrono::{DateTime, Utc};

use crate::model::ticket::{Impact, Status, Ticket, Urgency};

const OCCUPIED_POINTS: f64 = 30.0;
const AGE_POINTS_PER_DAY: f64 = 5.0;
const AGE_POINTS_CAP: f64 = 30.0;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Compute the priority score for a ticket as of `now`.
///
/// Resolved and verified tickets always score 0: they are explicitly
/// deprioritized regardless of every other field. Ages before `created_at`
/// (clock skew in a snapshot) clamp to zero rather than subtracting.
#[must_use]
pub fn score(ticket: &Ticket, now: DateTime<Utc>) -> i64 {
    if matches!(ticket.status, Status::Resolved | Status::Verified) {
        return 0;
    }

    let mut total = urgency_points(ticket.urgency) + impact_points(ticket.impact);

    if ticket.occupied {
        total += OCCUPIED_POINTS;
    }

    total += age_points(ticket.created_at, now);

    total.round() as i64
}

const fn urgency_points(urgency: Urgency) -> f64 {
    match urgency {
        Urgency::High => 50.0,
        Urgency::Medium => 30.0,
        Urgency::Low => 10.0,
    }
}

const fn impact_points(impact: Impact) -> f64 {
    match impact {
        Impact::Blocking => 40.0,
        Impact::Annoying => 20.0,
        Impact::None => 0.0,
    }
}

fn age_points(created_at: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    let days_open = (now - created_at).num_milliseconds() as f64 / MILLIS_PER_DAY;
    (days_open.max(0.0) * AGE_POINTS_PER_DAY).min(AGE_POINTS_CAP)
}
