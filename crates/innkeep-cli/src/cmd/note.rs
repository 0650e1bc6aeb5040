//! `ik note`: append a note to a ticket.

use clap::Args;

use innkeep_core::model::ticket_id::TicketId;

use crate::output::render_success;
use crate::Ctx;

#[derive(Args, Debug)]
pub struct NoteArgs {
    /// Ticket identifier, e.g. T-1001.
    pub id: String,

    /// Note text.
    pub text: String,
}

pub fn run_note(args: &NoteArgs, ctx: &mut Ctx) -> anyhow::Result<()> {
    let id = TicketId::new_unchecked(args.id.as_str());
    if let Err(err) = ctx.store.add_note(&id, &args.text, ctx.role) {
        return Err(super::fail(ctx.output, &err));
    }
    render_success(ctx.output, &format!("Note added to {id}"))
}
