//! `ik create`: report a new maintenance issue.

use clap::Args;
use std::str::FromStr;

use innkeep_core::model::ticket::{Impact, Urgency};
use innkeep_core::store::TicketDraft;

use crate::output::{render_json, render_success};
use crate::Ctx;

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Room number, e.g. 105.
    #[arg(long)]
    pub room: String,

    /// Asset category (air-conditioning, plumbing, electrical, tv-wifi,
    /// furniture, locks, other).
    #[arg(long)]
    pub asset: String,

    /// Issue type (wont-turn-on, leaking, strange-noise, broken, dirty,
    /// no-signal, bad-odor).
    #[arg(long)]
    pub issue: String,

    /// Free-text description of the problem.
    #[arg(long)]
    pub description: String,

    /// Urgency: low, medium, or high.
    #[arg(long, default_value = "low")]
    pub urgency: String,

    /// Impact: none, annoying, or blocking.
    #[arg(long, default_value = "none")]
    pub impact: String,

    /// The room is currently occupied by a guest.
    #[arg(long)]
    pub occupied: bool,

    /// Initial notes (repeatable).
    #[arg(long)]
    pub note: Vec<String>,
}

pub fn run_create(args: &CreateArgs, ctx: &mut Ctx) -> anyhow::Result<()> {
    let urgency = Urgency::from_str(&args.urgency)?;
    let impact = Impact::from_str(&args.impact)?;

    let draft = TicketDraft {
        room: args.room.clone(),
        occupied: args.occupied,
        asset: args.asset.clone(),
        issue: args.issue.clone(),
        description: args.description.clone(),
        urgency: Some(urgency),
        impact: Some(impact),
        created_by: Some(ctx.role),
        notes: args.note.clone(),
        ..TicketDraft::default()
    };

    let ticket = match ctx.store.create(draft, ctx.role, "Ticket created") {
        Ok(ticket) => ticket.clone(),
        Err(err) => return Err(super::fail(ctx.output, &err)),
    };

    if ctx.output.is_json() {
        return render_json(&ticket);
    }
    render_success(
        ctx.output,
        &format!(
            "Created {} (room {}, priority {})",
            ticket.id, ticket.room, ticket.priority
        ),
    )
}
