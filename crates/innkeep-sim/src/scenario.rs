//! Canned demo scenarios.
//!
//! Each scenario goes through the store's public operations, so every
//! invariant organic mutations get (fresh unique identifier, seeded audit
//! entry, recomputed score, snapshot write-through) holds here too. The
//! blocking scenarios prefer mutating a real workable ticket and only
//! synthesize a new one when nothing is workable.

use std::{fmt, str::FromStr};

use tracing::info;

use innkeep_core::error::StoreError;
use innkeep_core::model::ticket::{Impact, ParseEnumError, Role, Status, Urgency};
use innkeep_core::model::ticket_id::TicketId;
use innkeep_core::store::{Clock, TicketDraft, TicketPatch, TicketStore};
use innkeep_triage::rank;

/// The four scripted demo flows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scenario {
    /// An occupied-room guest complaint lands at reception. Deliberately
    /// targets room 105 + air conditioning so the recurrence flag lights
    /// up against the seed data.
    GuestComplaint,
    /// Cleaning finds a leak while preparing a vacant room.
    CleaningReport,
    /// The most pressing workable ticket stalls on a spare part.
    BlockPart,
    /// The most pressing workable ticket escalates to an outside vendor.
    BlockVendor,
}

impl Scenario {
    const fn as_str(self) -> &'static str {
        match self {
            Self::GuestComplaint => "guest-complaint",
            Self::CleaningReport => "cleaning-report",
            Self::BlockPart => "block-part",
            Self::BlockVendor => "block-vendor",
        }
    }

    pub const ALL: [Self; 4] = [
        Self::GuestComplaint,
        Self::CleaningReport,
        Self::BlockPart,
        Self::BlockVendor,
    ];
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scenario {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "guest-complaint" => Ok(Self::GuestComplaint),
            "cleaning-report" => Ok(Self::CleaningReport),
            "block-part" => Ok(Self::BlockPart),
            "block-vendor" => Ok(Self::BlockVendor),
            _ => Err(ParseEnumError {
                expected: "scenario",
                got: s.to_string(),
            }),
        }
    }
}

/// Run one scenario against the store. Returns the identifier of the
/// created or mutated ticket so a caller can focus it.
pub fn run<C: Clock>(
    store: &mut TicketStore<C>,
    scenario: Scenario,
) -> Result<TicketId, StoreError> {
    info!(%scenario, "running demo scenario");
    match scenario {
        Scenario::GuestComplaint => guest_complaint(store),
        Scenario::CleaningReport => cleaning_report(store),
        Scenario::BlockPart => block_part(store),
        Scenario::BlockVendor => block_vendor(store),
    }
}

fn guest_complaint<C: Clock>(store: &mut TicketStore<C>) -> Result<TicketId, StoreError> {
    let draft = TicketDraft {
        room: "105".into(),
        occupied: true,
        asset: "air-conditioning".into(),
        issue: "wont-turn-on".into(),
        description: "Demo: guest reports the air conditioning is unresponsive and cannot rest."
            .into(),
        urgency: Some(Urgency::High),
        impact: Some(Impact::Blocking),
        created_by: Some(Role::Reception),
        ..TicketDraft::default()
    };
    let ticket = store.create(draft, Role::Reception, "Ticket created by reception (demo)")?;
    Ok(ticket.id.clone())
}

fn cleaning_report<C: Clock>(store: &mut TicketStore<C>) -> Result<TicketId, StoreError> {
    let draft = TicketDraft {
        room: "112".into(),
        occupied: false,
        asset: "plumbing".into(),
        issue: "leaking".into(),
        description: "Demo: cleaning finds a dripping sink while preparing the room.".into(),
        urgency: Some(Urgency::Medium),
        impact: Some(Impact::Annoying),
        created_by: Some(Role::Cleaning),
        ..TicketDraft::default()
    };
    let ticket = store.create(draft, Role::Cleaning, "Ticket created by cleaning (demo)")?;
    Ok(ticket.id.clone())
}

fn block_part<C: Clock>(store: &mut TicketStore<C>) -> Result<TicketId, StoreError> {
    if let Some(candidate) = rank::block_candidate(store.tickets()) {
        let id = candidate.id.clone();
        store.update(
            &id,
            TicketPatch {
                status: Some(Status::WaitingPart),
                needs_part: Some(true),
                part_name: Some("Demo part (gasket / capacitor / outlet)".into()),
                ..TicketPatch::default()
            },
            Role::Maintenance,
            "Marked waiting for part (demo)",
        )?;
        return Ok(id);
    }

    // Nothing workable: synthesize a ticket that starts already blocked.
    let draft = TicketDraft {
        room: "101".into(),
        occupied: true,
        asset: "electrical".into(),
        issue: "broken".into(),
        description: "Demo: a replacement part is required to finish the repair.".into(),
        urgency: Some(Urgency::High),
        impact: Some(Impact::Blocking),
        status: Some(Status::WaitingPart),
        created_by: Some(Role::Maintenance),
        notes: vec!["Demo: component to replace identified.".into()],
        needs_part: true,
        part_name: Some("Demo part".into()),
        ..TicketDraft::default()
    };
    let ticket = store.create(
        draft,
        Role::Maintenance,
        "Ticket created already waiting for part (demo)",
    )?;
    Ok(ticket.id.clone())
}

fn block_vendor<C: Clock>(store: &mut TicketStore<C>) -> Result<TicketId, StoreError> {
    if let Some(candidate) = rank::block_candidate(store.tickets()) {
        let id = candidate.id.clone();
        store.update(
            &id,
            TicketPatch {
                status: Some(Status::Vendor),
                needs_vendor: Some(true),
                vendor_type: Some("Demo vendor (IT / HVAC / locksmith)".into()),
                ..TicketPatch::default()
            },
            Role::Maintenance,
            "Marked for vendor (demo)",
        )?;
        return Ok(id);
    }

    let draft = TicketDraft {
        room: "120".into(),
        occupied: false,
        asset: "tv-wifi".into(),
        issue: "no-signal".into(),
        description: "Demo: case escalated to an outside provider.".into(),
        urgency: Some(Urgency::Low),
        impact: Some(Impact::Annoying),
        status: Some(Status::Vendor),
        created_by: Some(Role::Maintenance),
        notes: vec!["Demo: reboot does not fix it, visit scheduled.".into()],
        needs_vendor: true,
        vendor_type: Some("Demo vendor".into()),
        ..TicketDraft::default()
    };
    let ticket = store.create(
        draft,
        Role::Maintenance,
        "Ticket created and escalated to vendor (demo)",
    )?;
    Ok(ticket.id.clone())
}
