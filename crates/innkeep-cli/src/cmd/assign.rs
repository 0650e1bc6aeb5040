//! `ik assign`: assign a technician to a ticket.

use clap::Args;

use innkeep_core::model::ticket_id::TicketId;

use crate::output::render_success;
use crate::Ctx;

#[derive(Args, Debug)]
pub struct AssignArgs {
    /// Ticket identifier, e.g. T-1001.
    pub id: String,

    /// Technician name.
    pub technician: String,
}

pub fn run_assign(args: &AssignArgs, ctx: &mut Ctx) -> anyhow::Result<()> {
    let id = TicketId::new_unchecked(args.id.as_str());
    if let Err(err) = ctx.store.assign(&id, &args.technician, ctx.role) {
        return Err(super::fail(ctx.output, &err));
    }
    render_success(
        ctx.output,
        &format!("Assigned {} to {}", id, args.technician),
    )
}

#[cfg(test)]
mod tests {
    use super::AssignArgs;
    use clap::Parser;

    #[derive(Parser)]
    struct Wrapper {
        #[command(flatten)]
        args: AssignArgs,
    }

    #[test]
    fn assign_args_are_positional() {
        let w = Wrapper::parse_from(["test", "T-1002", "Carlos M."]);
        assert_eq!(w.args.id, "T-1002");
        assert_eq!(w.args.technician, "Carlos M.");
    }
}
