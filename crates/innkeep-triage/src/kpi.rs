//! Headline KPIs and the shift staffing estimate.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use innkeep_core::config::{AnalyticsConfig, StaffingConfig};
use innkeep_core::model::ticket::{Status, Ticket};

/// Headline counts for the management surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KpiSnapshot {
    /// Non-terminal tickets.
    pub pending: usize,
    /// Non-terminal tickets that are high-urgency or blocking-impact.
    pub critical: usize,
    /// Tickets waiting on a part or a vendor.
    pub blocked: usize,
    /// Verified tickets closed inside the trailing closed window.
    pub closed_recently: usize,
}

/// Compute the KPI counts as of `now`.
#[must_use]
pub fn kpis(tickets: &[Ticket], config: &AnalyticsConfig, now: DateTime<Utc>) -> KpiSnapshot {
    let pending: Vec<&Ticket> = tickets.iter().filter(|t| t.is_active()).collect();

    KpiSnapshot {
        pending: pending.len(),
        critical: pending.iter().filter(|t| t.is_critical()).count(),
        blocked: tickets
            .iter()
            .filter(|t| matches!(t.status, Status::WaitingPart | Status::Vendor))
            .count(),
        closed_recently: tickets
            .iter()
            .filter(|t| t.status == Status::Verified)
            .filter_map(|t| closed_date(t))
            .filter(|&closed| now - closed <= Duration::days(config.closed_window_days))
            .count(),
    }
}

/// When a verified ticket was closed: the explicit closure stamp, or the
/// most recent history event whose action text denotes verification
/// (snapshots written before the stamp existed carry only the event).
#[must_use]
pub fn closed_date(ticket: &Ticket) -> Option<DateTime<Utc>> {
    if let Some(closed_at) = ticket.closed_at {
        return Some(closed_at);
    }
    ticket
        .history
        .events()
        .iter()
        .rev()
        .find(|event| event.action.to_lowercase().contains("verif"))
        .map(|event| event.at)
}

/// Rough per-shift technician estimate.
///
/// This is a volume heuristic, not resource planning: actionable tickets
/// (open, in-progress, resolved) are split across morning and evening
/// shares, divided by an assumed per-tech throughput, with a fixed night
/// guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StaffingEstimate {
    pub morning: u32,
    pub evening: u32,
    pub night: u32,
}

#[must_use]
pub fn staffing(tickets: &[Ticket], config: &StaffingConfig) -> StaffingEstimate {
    let actionable = tickets
        .iter()
        .filter(|t| {
            matches!(
                t.status,
                Status::Open | Status::InProgress | Status::Resolved
            )
        })
        .count();

    let shift = |share: f64| -> u32 {
        let load = (actionable as f64 * share / config.tickets_per_tech).ceil();
        (load as u32).max(1)
    };

    StaffingEstimate {
        morning: shift(config.morning_share),
        evening: shift(config.evening_share),
        night: config.night_staff,
    }
}

#[cfg(test)]
mod tests {
    use super::{closed_date, kpis, staffing};
    use chrono::{Duration, Utc};
    use innkeep_core::config::{AnalyticsConfig, StaffingConfig};
    use innkeep_core::model::audit::{AuditEvent, AuditTrail};
    use innkeep_core::model::ticket::{Impact, Role, Status, Ticket, Urgency};

    fn with_status(status: Status) -> Ticket {
        Ticket {
            status,
            created_at: Utc::now(),
            ..Ticket::default()
        }
    }

    #[test]
    fn pending_counts_everything_but_verified() {
        let tickets = vec![
            with_status(Status::Open),
            with_status(Status::Resolved),
            with_status(Status::Verified),
        ];
        let snapshot = kpis(&tickets, &AnalyticsConfig::default(), Utc::now());
        assert_eq!(snapshot.pending, 2);
    }

    #[test]
    fn critical_requires_high_urgency_or_blocking_impact() {
        let critical_urgency = Ticket {
            urgency: Urgency::High,
            ..with_status(Status::Open)
        };
        let critical_impact = Ticket {
            impact: Impact::Blocking,
            ..with_status(Status::InProgress)
        };
        let calm = with_status(Status::Open);
        let closed_but_critical = Ticket {
            urgency: Urgency::High,
            ..with_status(Status::Verified)
        };

        let tickets = vec![critical_urgency, critical_impact, calm, closed_but_critical];
        let snapshot = kpis(&tickets, &AnalyticsConfig::default(), Utc::now());
        assert_eq!(snapshot.critical, 2);
    }

    #[test]
    fn blocked_counts_part_and_vendor_waits() {
        let tickets = vec![
            with_status(Status::WaitingPart),
            with_status(Status::Vendor),
            with_status(Status::Open),
        ];
        let snapshot = kpis(&tickets, &AnalyticsConfig::default(), Utc::now());
        assert_eq!(snapshot.blocked, 2);
    }

    #[test]
    fn closed_recently_uses_the_closure_stamp() {
        let now = Utc::now();
        let recent = Ticket {
            closed_at: Some(now - Duration::days(2)),
            ..with_status(Status::Verified)
        };
        let stale = Ticket {
            closed_at: Some(now - Duration::days(12)),
            ..with_status(Status::Verified)
        };
        let snapshot = kpis(&[recent, stale], &AnalyticsConfig::default(), now);
        assert_eq!(snapshot.closed_recently, 1);
    }

    #[test]
    fn closed_date_falls_back_to_verification_history() {
        let now = Utc::now();
        let ticket = Ticket {
            history: AuditTrail::from_events(vec![
                AuditEvent::new(now - Duration::days(5), Role::Cleaning, "Ticket created"),
                AuditEvent::new(
                    now - Duration::days(1),
                    Role::Management,
                    "Verified and closed by management",
                ),
            ]),
            ..with_status(Status::Verified)
        };

        let closed = closed_date(&ticket).expect("fallback date");
        assert_eq!(closed, now - Duration::days(1));

        let snapshot = kpis(
            &[ticket],
            &AnalyticsConfig::default(),
            now,
        );
        assert_eq!(snapshot.closed_recently, 1);
    }

    #[test]
    fn verified_without_any_closure_evidence_is_not_counted() {
        let ticket = with_status(Status::Verified);
        let snapshot = kpis(&[ticket], &AnalyticsConfig::default(), Utc::now());
        assert_eq!(snapshot.closed_recently, 0);
    }

    #[test]
    fn staffing_never_drops_below_one_per_day_shift() {
        let estimate = staffing(&[], &StaffingConfig::default());
        assert_eq!(estimate.morning, 1);
        assert_eq!(estimate.evening, 1);
        assert_eq!(estimate.night, 1);
    }

    #[test]
    fn staffing_scales_with_actionable_volume() {
        // 10 actionable: morning ceil(10*0.6/4) = 2, evening ceil(10*0.4/4) = 1.
        let tickets: Vec<Ticket> = (0..10).map(|_| with_status(Status::Open)).collect();
        let estimate = staffing(&tickets, &StaffingConfig::default());
        assert_eq!(estimate.morning, 2);
        assert_eq!(estimate.evening, 1);

        // Blocked tickets are not actionable.
        let mut mixed = tickets;
        mixed.extend((0..8).map(|_| with_status(Status::WaitingPart)));
        let estimate = staffing(&mixed, &StaffingConfig::default());
        assert_eq!(estimate.morning, 2);
    }
}
