//! Priority ranking and the decision-support lists.

use innkeep_core::model::ticket::{Status, Ticket};

/// Active tickets sorted by descending priority score. The sort is
/// stable: ties keep the collection's canonical (newest-first) order.
#[must_use]
pub fn top_priority<'a>(tickets: &'a [Ticket], limit: Option<usize>) -> Vec<&'a Ticket> {
    let mut ranked: Vec<&Ticket> = tickets.iter().filter(|t| t.is_active()).collect();
    ranked.sort_by_key(|t| std::cmp::Reverse(t.priority));
    if let Some(limit) = limit {
        ranked.truncate(limit);
    }
    ranked
}

/// What to buy: active tickets flagged as needing a part.
#[must_use]
pub fn parts_needed<'a>(tickets: &'a [Ticket]) -> Vec<&'a Ticket> {
    tickets
        .iter()
        .filter(|t| t.needs_part && t.is_active())
        .collect()
}

/// What to outsource: active tickets flagged as needing a vendor.
#[must_use]
pub fn vendor_needed<'a>(tickets: &'a [Ticket]) -> Vec<&'a Ticket> {
    tickets
        .iter()
        .filter(|t| t.needs_vendor && t.is_active())
        .collect()
}

/// Active critical tickets, optionally capped for a sidebar list.
#[must_use]
pub fn critical_tickets<'a>(tickets: &'a [Ticket], limit: Option<usize>) -> Vec<&'a Ticket> {
    let mut out: Vec<&Ticket> = tickets
        .iter()
        .filter(|t| t.is_active() && t.is_critical())
        .collect();
    if let Some(limit) = limit {
        out.truncate(limit);
    }
    out
}

/// Active tickets for one room, highest priority first (room drill-down).
#[must_use]
pub fn room_active_by_priority<'a>(tickets: &'a [Ticket], room: &str) -> Vec<&'a Ticket> {
    let mut out: Vec<&Ticket> = tickets
        .iter()
        .filter(|t| t.room == room && t.is_active())
        .collect();
    out.sort_by_key(|t| std::cmp::Reverse(t.priority));
    out
}

/// The best candidate to block on a part or vendor: the highest-priority
/// ticket whose status is open or in-progress, ties broken by collection
/// order.
#[must_use]
pub fn block_candidate<'a>(tickets: &'a [Ticket]) -> Option<&'a Ticket> {
    tickets
        .iter()
        .filter(|t| matches!(t.status, Status::Open | Status::InProgress))
        .fold(None, |best: Option<&Ticket>, t| match best {
            Some(b) if b.priority >= t.priority => Some(b),
            _ => Some(t),
        })
}
