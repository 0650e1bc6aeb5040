//! One-call assembly of the full management report.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use innkeep_core::config::TrackerConfig;
use innkeep_core::model::room::Room;
use innkeep_core::model::ticket::Ticket;

use crate::kpi::{self, KpiSnapshot, StaffingEstimate};
use crate::rank;
use crate::recurrence::RecurrenceIndex;
use crate::rooms::{self, RoomSummary};

/// A ranked ticket row, denormalized for rendering and JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedTicket {
    pub id: String,
    pub room: String,
    pub asset: String,
    pub issue: String,
    pub status: String,
    pub priority: i64,
    pub occupied: bool,
    pub hotspot: bool,
    pub recurrent: bool,
}

/// One row of the what-to-buy list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PartRow {
    pub ticket: String,
    pub room: String,
    pub part: Option<String>,
}

/// One row of the what-to-outsource list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VendorRow {
    pub ticket: String,
    pub room: String,
    pub vendor: Option<String>,
}

/// Everything the management surface reads, computed in one pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TriageReport {
    pub kpis: KpiSnapshot,
    pub staffing: StaffingEstimate,
    pub top_priority: Vec<RankedTicket>,
    pub parts_needed: Vec<PartRow>,
    pub vendor_needed: Vec<VendorRow>,
    pub rooms: Vec<RoomSummary>,
    pub asset_frequency: Vec<(String, usize)>,
}

/// How many ranked rows the report carries.
const TOP_PRIORITY_LIMIT: usize = 5;

#[must_use]
pub fn build(
    tickets: &[Ticket],
    rooms_catalog: &[Room],
    config: &TrackerConfig,
    now: DateTime<Utc>,
) -> TriageReport {
    let index = RecurrenceIndex::build(tickets, &config.analytics, now);

    let ranked = rank::top_priority(tickets, Some(TOP_PRIORITY_LIMIT))
        .into_iter()
        .map(|t| RankedTicket {
            id: t.id.to_string(),
            room: t.room.clone(),
            asset: t.asset.clone(),
            issue: t.issue.clone(),
            status: t.status.to_string(),
            priority: t.priority,
            occupied: t.occupied,
            hotspot: index.room_is_hotspot(&t.room),
            recurrent: index.ticket_is_recurrent(t),
        })
        .collect();

    let report = TriageReport {
        kpis: kpi::kpis(tickets, &config.analytics, now),
        staffing: kpi::staffing(tickets, &config.staffing),
        top_priority: ranked,
        parts_needed: rank::parts_needed(tickets)
            .into_iter()
            .map(|t| PartRow {
                ticket: t.id.to_string(),
                room: t.room.clone(),
                part: t.part_name.clone(),
            })
            .collect(),
        vendor_needed: rank::vendor_needed(tickets)
            .into_iter()
            .map(|t| VendorRow {
                ticket: t.id.to_string(),
                room: t.room.clone(),
                vendor: t.vendor_type.clone(),
            })
            .collect(),
        rooms: rooms::room_map(rooms_catalog, tickets, &index),
        asset_frequency: rooms::asset_frequency(tickets),
    };

    debug!(
        pending = report.kpis.pending,
        critical = report.kpis.critical,
        "triage report built"
    );
    report
}
