//! `ik report`: the management view: KPIs, staffing estimate, priority
//! ranking, and the buy/outsource lists.

use clap::Args;
use std::io::Write;

use innkeep_core::model::room;
use innkeep_triage::report;

use crate::output::{pretty_kv, pretty_section, render_json, OutputMode};
use crate::Ctx;

#[derive(Args, Debug)]
pub struct ReportArgs {}

pub fn run_report(_args: &ReportArgs, ctx: &Ctx) -> anyhow::Result<()> {
    let triage = report::build(
        ctx.store.tickets(),
        &room::catalog(),
        &ctx.config,
        ctx.store.now(),
    );

    if ctx.output == OutputMode::Json {
        return render_json(&triage);
    }

    let mut out = std::io::stdout().lock();

    pretty_section(&mut out, "KPIs")?;
    pretty_kv(&mut out, "pending", triage.kpis.pending.to_string())?;
    pretty_kv(&mut out, "critical", triage.kpis.critical.to_string())?;
    pretty_kv(&mut out, "blocked", triage.kpis.blocked.to_string())?;
    pretty_kv(
        &mut out,
        "closed (7d)",
        triage.kpis.closed_recently.to_string(),
    )?;

    writeln!(out)?;
    pretty_section(&mut out, "Estimated shift load")?;
    pretty_kv(
        &mut out,
        "morning",
        format!("{} technician(s)", triage.staffing.morning),
    )?;
    pretty_kv(
        &mut out,
        "evening",
        format!("{} technician(s)", triage.staffing.evening),
    )?;
    pretty_kv(
        &mut out,
        "night",
        format!("{} on call", triage.staffing.night),
    )?;

    writeln!(out)?;
    pretty_section(&mut out, "What to repair first")?;
    for row in &triage.top_priority {
        let mut tags = String::new();
        if row.occupied {
            tags.push_str(" [occupied]");
        }
        if row.hotspot {
            tags.push_str(" [hotspot]");
        }
        if row.recurrent {
            tags.push_str(" [recurrent]");
        }
        writeln!(
            out,
            "  {:>4}  {}  room {:<5} {} ({}){}",
            row.priority, row.id, row.room, row.asset, row.status, tags
        )?;
    }

    writeln!(out)?;
    pretty_section(&mut out, "What to buy")?;
    if triage.parts_needed.is_empty() {
        writeln!(out, "  nothing pending")?;
    }
    for row in &triage.parts_needed {
        writeln!(
            out,
            "  {} (room {}): {}",
            row.ticket,
            row.room,
            row.part.as_deref().unwrap_or("part not named yet")
        )?;
    }

    writeln!(out)?;
    pretty_section(&mut out, "What to outsource")?;
    if triage.vendor_needed.is_empty() {
        writeln!(out, "  nothing pending")?;
    }
    for row in &triage.vendor_needed {
        writeln!(
            out,
            "  {} (room {}): {}",
            row.ticket,
            row.room,
            row.vendor.as_deref().unwrap_or("vendor not chosen yet")
        )?;
    }

    writeln!(out)?;
    pretty_section(&mut out, "Issues by asset")?;
    for (asset, count) in &triage.asset_frequency {
        writeln!(out, "  {count:>3}  {asset}")?;
    }

    Ok(())
}
