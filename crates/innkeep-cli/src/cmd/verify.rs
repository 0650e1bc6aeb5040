//! `ik verify`: verify and close a resolved ticket.
//!
//! Both checklist confirmations are required flags; the store rejects
//! anything less, so there is no way to close a ticket without them.

use clap::Args;

use innkeep_core::model::ticket_id::TicketId;
use innkeep_core::store::VerificationChecklist;

use crate::output::render_success;
use crate::Ctx;

#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Ticket identifier, e.g. T-1001.
    pub id: String,

    /// Confirm the work area was left clean.
    #[arg(long)]
    pub area_clean: bool,

    /// Confirm the repaired asset works.
    #[arg(long)]
    pub asset_working: bool,
}

pub fn run_verify(args: &VerifyArgs, ctx: &mut Ctx) -> anyhow::Result<()> {
    let id = TicketId::new_unchecked(args.id.as_str());
    let checklist = VerificationChecklist {
        area_clean: args.area_clean,
        asset_functional: args.asset_working,
    };
    if let Err(err) = ctx.store.verify(&id, ctx.role, checklist) {
        return Err(super::fail(ctx.output, &err));
    }
    render_success(ctx.output, &format!("{id} verified and closed"))
}

#[cfg(test)]
mod tests {
    use super::VerifyArgs;
    use clap::Parser;

    #[derive(Parser)]
    struct Wrapper {
        #[command(flatten)]
        args: VerifyArgs,
    }

    #[test]
    fn checklist_flags_default_to_false() {
        let w = Wrapper::parse_from(["test", "T-1004"]);
        assert!(!w.args.area_clean);
        assert!(!w.args.asset_working);

        let w = Wrapper::parse_from(["test", "T-1004", "--area-clean", "--asset-working"]);
        assert!(w.args.area_clean);
        assert!(w.args.asset_working);
    }
}
