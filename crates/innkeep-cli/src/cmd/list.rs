//! `ik list`: list tickets with optional filters.

use clap::Args;
use std::io::Write;
use std::str::FromStr;

use innkeep_core::model::ticket::{Status, Ticket, Urgency};

use crate::output::{pretty_rule, render_json, OutputMode};
use crate::Ctx;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Filter by status (open, in-progress, waiting-part, vendor,
    /// resolved, verified).
    #[arg(long)]
    pub status: Option<String>,

    /// Filter by room number.
    #[arg(long)]
    pub room: Option<String>,

    /// Only high-urgency tickets.
    #[arg(long)]
    pub urgent: bool,

    /// Include verified tickets (excluded by default).
    #[arg(long)]
    pub all: bool,
}

pub fn run_list(args: &ListArgs, ctx: &Ctx) -> anyhow::Result<()> {
    let status = args
        .status
        .as_deref()
        .map(Status::from_str)
        .transpose()?;

    let tickets: Vec<&Ticket> = ctx
        .store
        .tickets()
        .iter()
        .filter(|t| match status {
            Some(wanted) => t.status == wanted,
            None => args.all || t.is_active(),
        })
        .filter(|t| args.room.as_deref().is_none_or(|room| t.room == room))
        .filter(|t| !args.urgent || t.urgency == Urgency::High)
        .collect();

    match ctx.output {
        OutputMode::Json => render_json(&tickets),
        OutputMode::Text => {
            let mut out = std::io::stdout().lock();
            for t in tickets {
                writeln!(
                    out,
                    "{}\t{}\t{}\t{}\t{}\t{}",
                    t.id, t.room, t.status, t.urgency, t.priority, t.asset
                )?;
            }
            Ok(())
        }
        OutputMode::Pretty => {
            let mut out = std::io::stdout().lock();
            writeln!(
                out,
                "{:<8} {:<6} {:<13} {:<8} {:>8}  {}",
                "ID", "ROOM", "STATUS", "URGENCY", "PRIORITY", "ASSET"
            )?;
            pretty_rule(&mut out)?;
            for t in &tickets {
                writeln!(
                    out,
                    "{:<8} {:<6} {:<13} {:<8} {:>8}  {}",
                    t.id.to_string(),
                    t.room,
                    t.status.to_string(),
                    t.urgency.to_string(),
                    t.priority,
                    t.asset
                )?;
            }
            writeln!(out, "\n{} ticket(s)", tickets.len())?;
            Ok(())
        }
    }
}
