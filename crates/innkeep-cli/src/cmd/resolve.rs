//! `ik resolve`: mark a ticket resolved, pending verification.

use clap::Args;

use innkeep_core::model::ticket_id::TicketId;

use crate::output::render_success;
use crate::Ctx;

#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Ticket identifier, e.g. T-1001.
    pub id: String,
}

pub fn run_resolve(args: &ResolveArgs, ctx: &mut Ctx) -> anyhow::Result<()> {
    let id = TicketId::new_unchecked(args.id.as_str());
    if let Err(err) = ctx.store.resolve(&id, ctx.role) {
        return Err(super::fail(ctx.output, &err));
    }
    render_success(ctx.output, &format!("{id} resolved, pending verification"))
}
