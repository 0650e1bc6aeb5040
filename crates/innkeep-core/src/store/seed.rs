//! The fixed demo dataset: nine tickets covering every status, with
//! pre-populated history. Used for first run and for a full reset.
//!
//! Seed records carry a placeholder priority of zero; the store recomputes
//! every score on load, so the stored value is never trusted.

use chrono::{DateTime, Duration, Utc};

use crate::model::audit::{AuditEvent, AuditTrail};
use crate::model::ticket::{Impact, Role, Status, Ticket, Urgency};
use crate::model::ticket_id::TicketId;

fn days_ago(now: DateTime<Utc>, days: i64) -> DateTime<Utc> {
    now - Duration::days(days)
}

/// Build the seed collection with ages expressed relative to `now`.
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn dataset(now: DateTime<Utc>) -> Vec<Ticket> {
    vec![
        Ticket {
            id: TicketId::new_unchecked("T-1001"),
            room: "105".into(),
            occupied: true,
            asset: "air-conditioning".into(),
            issue: "wont-turn-on".into(),
            description: "Guest reports the room is very hot; the remote does not respond.".into(),
            urgency: Urgency::High,
            impact: Impact::Blocking,
            status: Status::Open,
            created_at: days_ago(now, 0),
            created_by: Role::Reception,
            history: AuditTrail::from_events(vec![AuditEvent::new(
                days_ago(now, 0),
                Role::Reception,
                "Ticket created",
            )]),
            ..Ticket::default()
        },
        Ticket {
            id: TicketId::new_unchecked("T-1002"),
            room: "112".into(),
            occupied: false,
            asset: "plumbing".into(),
            issue: "leaking".into(),
            description: "Bathroom sink faucet drips constantly.".into(),
            urgency: Urgency::Medium,
            impact: Impact::Annoying,
            status: Status::InProgress,
            created_at: days_ago(now, 2),
            created_by: Role::Cleaning,
            assigned_to: Some("Carlos M.".into()),
            notes: vec!["Washer needs replacing.".into()],
            history: AuditTrail::from_events(vec![
                AuditEvent::new(days_ago(now, 2), Role::Cleaning, "Ticket created"),
                AuditEvent::new(days_ago(now, 1), Role::Maintenance, "Assigned to Carlos M."),
            ]),
            ..Ticket::default()
        },
        Ticket {
            id: TicketId::new_unchecked("T-1003"),
            room: "101".into(),
            occupied: true,
            asset: "electrical".into(),
            issue: "broken".into(),
            description: "Nightstand outlet sparks when used.".into(),
            urgency: Urgency::High,
            impact: Impact::Blocking,
            status: Status::WaitingPart,
            created_at: days_ago(now, 1),
            created_by: Role::Reception,
            notes: vec![
                "Circuit disconnected for safety.".into(),
                "Replacement requested.".into(),
            ],
            needs_part: true,
            part_name: Some("Universal premium outlet, white".into()),
            history: AuditTrail::from_events(vec![
                AuditEvent::new(days_ago(now, 1), Role::Reception, "Ticket created"),
                AuditEvent::new(days_ago(now, 0), Role::Maintenance, "Waiting for part"),
            ]),
            ..Ticket::default()
        },
        Ticket {
            id: TicketId::new_unchecked("T-1004"),
            room: "118".into(),
            occupied: false,
            asset: "furniture".into(),
            issue: "broken".into(),
            description: "Desk chair leg is unstable.".into(),
            urgency: Urgency::Low,
            impact: Impact::Annoying,
            status: Status::Resolved,
            created_at: days_ago(now, 5),
            created_by: Role::Cleaning,
            notes: vec!["Repaired with industrial adhesive.".into()],
            history: AuditTrail::from_events(vec![
                AuditEvent::new(days_ago(now, 5), Role::Cleaning, "Ticket created"),
                AuditEvent::new(days_ago(now, 2), Role::Maintenance, "Resolved"),
            ]),
            ..Ticket::default()
        },
        Ticket {
            id: TicketId::new_unchecked("T-1005"),
            room: "105".into(),
            occupied: true,
            asset: "air-conditioning".into(),
            issue: "leaking".into(),
            description: "Condensation dripping onto the carpet; second report for this unit."
                .into(),
            urgency: Urgency::High,
            impact: Impact::Annoying,
            status: Status::Open,
            created_at: days_ago(now, 0),
            created_by: Role::Cleaning,
            history: AuditTrail::from_events(vec![AuditEvent::new(
                days_ago(now, 0),
                Role::Cleaning,
                "Ticket created",
            )]),
            ..Ticket::default()
        },
        Ticket {
            id: TicketId::new_unchecked("T-1006"),
            room: "120".into(),
            occupied: false,
            asset: "tv-wifi".into(),
            issue: "no-signal".into(),
            description: "TV will not connect to the entertainment system.".into(),
            urgency: Urgency::Low,
            impact: Impact::Annoying,
            status: Status::Vendor,
            created_at: days_ago(now, 3),
            created_by: Role::Maintenance,
            notes: vec!["Reboot did not help. Escalated to the provider.".into()],
            needs_vendor: true,
            vendor_type: Some("External IT support".into()),
            history: AuditTrail::from_events(vec![AuditEvent::new(
                days_ago(now, 3),
                Role::Maintenance,
                "Ticket created and escalated",
            )]),
            ..Ticket::default()
        },
        Ticket {
            id: TicketId::new_unchecked("T-1007"),
            room: "115".into(),
            occupied: true,
            asset: "plumbing".into(),
            issue: "bad-odor".into(),
            description: "Drain smell in the main bathroom.".into(),
            urgency: Urgency::High,
            impact: Impact::Annoying,
            status: Status::Open,
            created_at: days_ago(now, 0),
            created_by: Role::Reception,
            history: AuditTrail::from_events(vec![AuditEvent::new(
                days_ago(now, 0),
                Role::Reception,
                "Ticket created",
            )]),
            ..Ticket::default()
        },
        Ticket {
            id: TicketId::new_unchecked("T-1008"),
            room: "102".into(),
            occupied: false,
            asset: "locks".into(),
            issue: "broken".into(),
            description: "Electronic lock battery running low.".into(),
            urgency: Urgency::Medium,
            impact: Impact::Blocking,
            status: Status::Verified,
            created_at: days_ago(now, 6),
            created_by: Role::Cleaning,
            notes: vec!["Batteries replaced.".into()],
            verified_by: Some("Night manager".into()),
            closed_at: Some(days_ago(now, 1)),
            history: AuditTrail::from_events(vec![
                AuditEvent::new(days_ago(now, 6), Role::Cleaning, "Ticket created"),
                AuditEvent::new(days_ago(now, 2), Role::Maintenance, "Resolved"),
                AuditEvent::new(days_ago(now, 1), Role::Management, "Verified"),
            ]),
            ..Ticket::default()
        },
        Ticket {
            id: TicketId::new_unchecked("T-1009"),
            room: "109".into(),
            occupied: true,
            asset: "electrical".into(),
            issue: "wont-turn-on".into(),
            description: "Floor lamp bulb burned out.".into(),
            urgency: Urgency::Low,
            impact: Impact::None,
            status: Status::Open,
            created_at: days_ago(now, 1),
            created_by: Role::Cleaning,
            history: AuditTrail::from_events(vec![AuditEvent::new(
                days_ago(now, 1),
                Role::Cleaning,
                "Ticket created",
            )]),
            ..Ticket::default()
        },
    ]
}
