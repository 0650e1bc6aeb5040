//! The ticket store: the single owner of the in-memory collection.
//!
//! Every mutation flows through here: the store applies the change,
//! validates the status transition, appends exactly one audit event,
//! recomputes the priority score, and writes the snapshot through before
//! returning. A mutation is not complete until its snapshot write returns;
//! on write failure the in-memory state stays updated and the error is
//! surfaced to the caller.

pub mod clock;
pub mod repository;
pub mod seed;

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::error::StoreError;
use crate::model::audit::AuditEvent;
use crate::model::audit::AuditTrail;
use crate::model::ticket::{Impact, Role, Status, Ticket, Urgency};
use crate::model::ticket_id::TicketId;
use crate::priority;

pub use clock::{Clock, SystemClock};
pub use repository::{FileSnapshots, MemorySnapshots, SnapshotRepository};

/// Dedicated audit label for the resolve transition.
pub const RESOLVED_LABEL: &str = "Marked Resolved — pending verification";

/// Identifier sequence floor: the first ticket ever created is `T-1001`.
const ID_BASE: u64 = 1000;

/// How the collection came to be at `open` time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// No snapshot existed; the seed dataset was loaded.
    SeededFresh,
    /// A snapshot was read and deserialized.
    Snapshot { tickets: usize },
    /// A snapshot existed but did not parse; the seed dataset was
    /// restored. Callers should tell the user instead of staying silent.
    CorruptSnapshotRestored,
}

/// Caller-supplied fields for a new ticket.
#[derive(Debug, Clone, Default)]
pub struct TicketDraft {
    pub room: String,
    pub occupied: bool,
    pub asset: String,
    pub issue: String,
    pub description: String,
    pub urgency: Option<Urgency>,
    pub impact: Option<Impact>,
    /// Starting status; organic creation leaves this unset (open).
    /// Scenario synthesis may start a ticket already blocked.
    pub status: Option<Status>,
    pub created_by: Option<Role>,
    pub assigned_to: Option<String>,
    pub notes: Vec<String>,
    pub needs_part: bool,
    pub part_name: Option<String>,
    pub needs_vendor: bool,
    pub vendor_type: Option<String>,
}

/// A shallow merge over an existing ticket. `notes` replaces the whole
/// list; callers append via read-modify-write (or [`TicketStore::add_note`]).
#[derive(Debug, Clone, Default)]
pub struct TicketPatch {
    pub status: Option<Status>,
    pub occupied: Option<bool>,
    pub description: Option<String>,
    pub urgency: Option<Urgency>,
    pub impact: Option<Impact>,
    pub assigned_to: Option<String>,
    pub notes: Option<Vec<String>>,
    pub needs_part: Option<bool>,
    pub part_name: Option<String>,
    pub needs_vendor: Option<bool>,
    pub vendor_type: Option<String>,
    pub verified_by: Option<String>,
    pub closed_at: Option<DateTime<Utc>>,
}

/// The two independently-tracked confirmations gating verification.
#[derive(Debug, Clone, Copy, Default)]
pub struct VerificationChecklist {
    pub area_clean: bool,
    pub asset_functional: bool,
}

/// In-memory ticket collection with write-through snapshot persistence.
pub struct TicketStore<C: Clock = SystemClock> {
    tickets: Vec<Ticket>,
    repo: Box<dyn SnapshotRepository>,
    clock: C,
}

impl<C: Clock> TicketStore<C> {
    /// Load the collection from the repository, falling back to the seed
    /// dataset when no snapshot exists or the snapshot is corrupt. Every
    /// priority score is recomputed before the store is usable; stored
    /// scores are never trusted.
    pub fn open(repo: Box<dyn SnapshotRepository>, clock: C) -> Result<(Self, LoadOutcome), StoreError> {
        let now = clock.now();
        let (tickets, outcome) = match repo.load()? {
            None => (seed::dataset(now), LoadOutcome::SeededFresh),
            Some(raw) => match serde_json::from_str::<Vec<Ticket>>(&raw) {
                Ok(tickets) => {
                    let count = tickets.len();
                    (tickets, LoadOutcome::Snapshot { tickets: count })
                }
                Err(err) => {
                    warn!(%err, "snapshot did not parse; restoring seed data");
                    (seed::dataset(now), LoadOutcome::CorruptSnapshotRestored)
                }
            },
        };

        let mut store = Self {
            tickets,
            repo,
            clock,
        };
        store.rescore_all();
        debug!(tickets = store.tickets.len(), ?outcome, "store opened");
        Ok((store, outcome))
    }

    /// The collection in canonical display order (newest first).
    #[must_use]
    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    #[must_use]
    pub fn get(&self, id: &TicketId) -> Option<&Ticket> {
        self.tickets.iter().find(|t| &t.id == id)
    }

    /// Current time from the injected clock.
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Create a ticket from a draft, assign the next identifier, seed its
    /// audit trail, compute its score, and persist.
    pub fn create(
        &mut self,
        draft: TicketDraft,
        acting_role: Role,
        action_label: &str,
    ) -> Result<&Ticket, StoreError> {
        let now = self.clock.now();
        let mut ticket = Ticket {
            id: self.next_id(),
            room: draft.room,
            occupied: draft.occupied,
            asset: draft.asset,
            issue: draft.issue,
            description: draft.description,
            urgency: draft.urgency.unwrap_or(Urgency::Low),
            impact: draft.impact.unwrap_or(Impact::None),
            status: draft.status.unwrap_or(Status::Open),
            created_at: now,
            created_by: draft.created_by.unwrap_or(acting_role),
            assigned_to: draft.assigned_to,
            notes: draft.notes,
            needs_part: draft.needs_part,
            part_name: draft.part_name,
            needs_vendor: draft.needs_vendor,
            vendor_type: draft.vendor_type,
            history: AuditTrail::seeded(AuditEvent::new(now, acting_role, action_label)),
            ..Ticket::default()
        };
        ticket.priority = priority::score(&ticket, now);

        debug!(id = %ticket.id, room = %ticket.room, "ticket created");
        self.tickets.insert(0, ticket);
        self.persist()?;
        Ok(&self.tickets[0])
    }

    /// Merge a patch over an existing ticket and append one audit event.
    ///
    /// Unknown identifiers are an error, not a silent no-op. Status
    /// changes go through the transition rules; moving to `verified` is
    /// only possible through [`Self::verify`], which enforces the
    /// checklist.
    pub fn update(
        &mut self,
        id: &TicketId,
        patch: TicketPatch,
        acting_role: Role,
        action_label: &str,
    ) -> Result<(), StoreError> {
        if patch.status == Some(Status::Verified) {
            return Err(StoreError::VerificationIncomplete {
                id: id.clone(),
                missing: "verification requires the checklist; use verify",
            });
        }
        self.apply(id, patch, acting_role, action_label)
    }

    /// Change status with the default audit label convention
    /// ("Status changed to {status}"; resolve has its dedicated label).
    pub fn set_status(
        &mut self,
        id: &TicketId,
        status: Status,
        acting_role: Role,
    ) -> Result<(), StoreError> {
        if status == Status::Resolved {
            return self.resolve(id, acting_role);
        }
        let label = format!("Status changed to {status}");
        self.update(
            id,
            TicketPatch {
                status: Some(status),
                ..TicketPatch::default()
            },
            acting_role,
            &label,
        )
    }

    /// Mark a ticket resolved, pending verification.
    pub fn resolve(&mut self, id: &TicketId, acting_role: Role) -> Result<(), StoreError> {
        self.apply(
            id,
            TicketPatch {
                status: Some(Status::Resolved),
                ..TicketPatch::default()
            },
            acting_role,
            RESOLVED_LABEL,
        )
    }

    /// Verify and close a resolved ticket.
    ///
    /// Both checklist confirmations must be true; the gate lives here in
    /// the store, not in any presentation layer. Stamps the verifier and
    /// the closure timestamp.
    pub fn verify(
        &mut self,
        id: &TicketId,
        acting_role: Role,
        checklist: VerificationChecklist,
    ) -> Result<(), StoreError> {
        let missing = match (checklist.area_clean, checklist.asset_functional) {
            (true, true) => None,
            (false, true) => Some("area-clean confirmation missing"),
            (true, false) => Some("asset-functional confirmation missing"),
            (false, false) => Some("both checklist confirmations missing"),
        };
        if let Some(missing) = missing {
            return Err(StoreError::VerificationIncomplete {
                id: id.clone(),
                missing,
            });
        }

        let now = self.clock.now();
        let label = format!("Verified and closed by {acting_role}");
        self.apply(
            id,
            TicketPatch {
                status: Some(Status::Verified),
                verified_by: Some(acting_role.to_string()),
                closed_at: Some(now),
                ..TicketPatch::default()
            },
            acting_role,
            &label,
        )
    }

    /// Append one note (read-modify-write over the notes list).
    pub fn add_note(
        &mut self,
        id: &TicketId,
        note: &str,
        acting_role: Role,
    ) -> Result<(), StoreError> {
        let note = note.trim();
        let mut notes = self
            .get(id)
            .ok_or_else(|| StoreError::TicketNotFound(id.clone()))?
            .notes
            .clone();
        notes.push(note.to_string());

        let label = format!("Note added: {}", truncate_label(note, 28));
        self.apply(
            id,
            TicketPatch {
                notes: Some(notes),
                ..TicketPatch::default()
            },
            acting_role,
            &label,
        )
    }

    /// Assign a technician by name.
    pub fn assign(
        &mut self,
        id: &TicketId,
        technician: &str,
        acting_role: Role,
    ) -> Result<(), StoreError> {
        let label = format!("Assigned to {technician}");
        self.apply(
            id,
            TicketPatch {
                assigned_to: Some(technician.to_string()),
                ..TicketPatch::default()
            },
            acting_role,
            &label,
        )
    }

    /// Discard the snapshot and restore the seed dataset.
    pub fn reset(&mut self) -> Result<(), StoreError> {
        let now = self.clock.now();
        self.tickets = seed::dataset(now);
        self.rescore_all();
        debug!("store reset to seed data");
        self.persist()
    }

    fn apply(
        &mut self,
        id: &TicketId,
        patch: TicketPatch,
        acting_role: Role,
        action_label: &str,
    ) -> Result<(), StoreError> {
        let now = self.clock.now();
        let ticket = self
            .tickets
            .iter_mut()
            .find(|t| &t.id == id)
            .ok_or_else(|| StoreError::TicketNotFound(id.clone()))?;

        if let Some(next) = patch.status {
            ticket.status.can_transition_to(next)?;
            ticket.status = next;
        }
        if let Some(occupied) = patch.occupied {
            ticket.occupied = occupied;
        }
        if let Some(description) = patch.description {
            ticket.description = description;
        }
        if let Some(urgency) = patch.urgency {
            ticket.urgency = urgency;
        }
        if let Some(impact) = patch.impact {
            ticket.impact = impact;
        }
        if let Some(assigned_to) = patch.assigned_to {
            ticket.assigned_to = Some(assigned_to);
        }
        if let Some(notes) = patch.notes {
            ticket.notes = notes;
        }
        if let Some(needs_part) = patch.needs_part {
            ticket.needs_part = needs_part;
        }
        if let Some(part_name) = patch.part_name {
            ticket.part_name = Some(part_name);
        }
        if let Some(needs_vendor) = patch.needs_vendor {
            ticket.needs_vendor = needs_vendor;
        }
        if let Some(vendor_type) = patch.vendor_type {
            ticket.vendor_type = Some(vendor_type);
        }
        if let Some(verified_by) = patch.verified_by {
            ticket.verified_by = Some(verified_by);
        }
        if let Some(closed_at) = patch.closed_at {
            ticket.closed_at = Some(closed_at);
        }

        ticket.history.append(AuditEvent::new(now, acting_role, action_label));
        ticket.priority = priority::score(ticket, now);
        debug!(id = %id, action = action_label, "ticket updated");
        self.persist()
    }

    fn next_id(&self) -> TicketId {
        let max = self
            .tickets
            .iter()
            .filter_map(|t| t.id.numeric_suffix())
            .fold(ID_BASE, u64::max);
        TicketId::from_seq(max + 1)
    }

    fn rescore_all(&mut self) {
        let now = self.clock.now();
        for ticket in &mut self.tickets {
            ticket.priority = priority::score(ticket, now);
        }
    }

    fn persist(&self) -> Result<(), StoreError> {
        let payload = serde_json::to_string_pretty(&self.tickets)?;
        self.repo.save(&payload)?;
        Ok(())
    }
}

fn truncate_label(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut truncated: String = text.chars().take(max_chars).collect();
    truncated.push('…');
    truncated
}
