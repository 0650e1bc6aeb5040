//! `ik reset`: discard the snapshot and restore seed data.

use clap::Args;

use crate::output::{render_error, render_success, CliError};
use crate::Ctx;

#[derive(Args, Debug)]
pub struct ResetArgs {
    /// Skip the confirmation requirement.
    #[arg(long)]
    pub yes: bool,
}

pub fn run_reset(args: &ResetArgs, ctx: &mut Ctx) -> anyhow::Result<()> {
    if !args.yes {
        let err = CliError::new(
            "reset discards every ticket; pass --yes to confirm",
            "E9001",
        );
        render_error(ctx.output, &err)?;
        anyhow::bail!("{}", err.message);
    }

    if let Err(err) = ctx.store.reset() {
        return Err(super::fail(ctx.output, &err));
    }
    render_success(
        ctx.output,
        &format!("Seed data restored ({} tickets)", ctx.store.tickets().len()),
    )
}
