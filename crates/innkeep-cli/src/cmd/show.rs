//! `ik show`: one ticket in full, audit log included.

use clap::Args;
use std::io::Write;

use innkeep_core::error::StoreError;
use innkeep_core::model::ticket::Ticket;
use innkeep_core::model::ticket_id::TicketId;

use crate::output::{pretty_kv, pretty_rule, pretty_section, render_json, OutputMode};
use crate::Ctx;

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Ticket identifier, e.g. T-1001.
    pub id: String,
}

pub fn run_show(args: &ShowArgs, ctx: &Ctx) -> anyhow::Result<()> {
    let id = TicketId::new_unchecked(args.id.as_str());
    let Some(ticket) = ctx.store.get(&id) else {
        return Err(super::fail(
            ctx.output,
            &StoreError::TicketNotFound(id),
        ));
    };

    match ctx.output {
        OutputMode::Json => render_json(ticket),
        OutputMode::Text => {
            let mut out = std::io::stdout().lock();
            writeln!(
                out,
                "{}\t{}\t{}\t{}\t{}\t{}\t{}",
                ticket.id,
                ticket.room,
                ticket.status,
                ticket.urgency,
                ticket.impact,
                ticket.priority,
                ticket.description
            )?;
            Ok(())
        }
        OutputMode::Pretty => {
            let mut out = std::io::stdout().lock();
            print_pretty(&mut out, ticket)?;
            Ok(())
        }
    }
}

fn print_pretty(out: &mut dyn Write, ticket: &Ticket) -> std::io::Result<()> {
    pretty_section(out, &format!("{} (room {})", ticket.id, ticket.room))?;
    pretty_kv(out, "asset", format!("{} ({})", ticket.asset, ticket.issue))?;
    pretty_kv(out, "status", ticket.status.to_string())?;
    pretty_kv(out, "urgency", ticket.urgency.to_string())?;
    pretty_kv(out, "impact", ticket.impact.to_string())?;
    pretty_kv(out, "priority", ticket.priority.to_string())?;
    pretty_kv(out, "occupied", if ticket.occupied { "yes" } else { "no" })?;
    pretty_kv(out, "reported by", ticket.created_by.to_string())?;
    pretty_kv(
        out,
        "created",
        ticket.created_at.format("%Y-%m-%d %H:%M UTC").to_string(),
    )?;
    if let Some(assignee) = &ticket.assigned_to {
        pretty_kv(out, "assigned to", assignee)?;
    }
    if ticket.needs_part {
        pretty_kv(
            out,
            "part",
            ticket.part_name.as_deref().unwrap_or("(not named yet)"),
        )?;
    }
    if ticket.needs_vendor {
        pretty_kv(
            out,
            "vendor",
            ticket.vendor_type.as_deref().unwrap_or("(not chosen yet)"),
        )?;
    }
    if let Some(verifier) = &ticket.verified_by {
        pretty_kv(out, "verified by", verifier)?;
    }
    if let Some(closed_at) = ticket.closed_at {
        pretty_kv(
            out,
            "closed",
            closed_at.format("%Y-%m-%d %H:%M UTC").to_string(),
        )?;
    }

    writeln!(out)?;
    writeln!(out, "{}", ticket.description)?;

    if !ticket.notes.is_empty() {
        writeln!(out)?;
        pretty_section(out, "Notes")?;
        for note in &ticket.notes {
            writeln!(out, "  - {note}")?;
        }
    }

    writeln!(out)?;
    pretty_section(out, "Audit log")?;
    for event in ticket.history.events() {
        writeln!(
            out,
            "  {}  {:<12} {}",
            event.at.format("%Y-%m-%d %H:%M"),
            event.actor.to_string(),
            event.action
        )?;
    }
    pretty_rule(out)?;
    Ok(())
}
