//! `ik start`: move a ticket to in-progress.

use clap::Args;

use innkeep_core::model::ticket::Status;
use innkeep_core::model::ticket_id::TicketId;

use crate::output::render_success;
use crate::Ctx;

#[derive(Args, Debug)]
pub struct StartArgs {
    /// Ticket identifier, e.g. T-1001.
    pub id: String,
}

pub fn run_start(args: &StartArgs, ctx: &mut Ctx) -> anyhow::Result<()> {
    let id = TicketId::new_unchecked(args.id.as_str());
    if let Err(err) = ctx.store.set_status(&id, Status::InProgress, ctx.role) {
        return Err(super::fail(ctx.output, &err));
    }
    render_success(ctx.output, &format!("{id} is now in progress"))
}
