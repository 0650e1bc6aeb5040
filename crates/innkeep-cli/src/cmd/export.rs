//! `ik export`: write the collection as CSV.

use anyhow::Context;
use clap::Args;
use std::path::PathBuf;

use innkeep_core::export;

use crate::output::render_success;
use crate::Ctx;

#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Write to a file instead of stdout.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

pub fn run_export(args: &ExportArgs, ctx: &Ctx) -> anyhow::Result<()> {
    let tickets = ctx.store.tickets();

    match &args.out {
        Some(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            export::write_csv(tickets, file)?;
            render_success(
                ctx.output,
                &format!("Exported {} ticket(s) to {}", tickets.len(), path.display()),
            )
        }
        None => {
            export::write_csv(tickets, std::io::stdout().lock())?;
            Ok(())
        }
    }
}
