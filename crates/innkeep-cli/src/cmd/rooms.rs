//! `ik rooms`: the room map, or one room's active tickets.

use clap::Args;
use std::io::Write;

use innkeep_core::config::TrackerConfig;
use innkeep_core::model::room;
use innkeep_triage::rank;
use innkeep_triage::rooms::{room_map, RoomCondition};
use innkeep_triage::RecurrenceIndex;

use crate::output::{pretty_rule, render_json, OutputMode};
use crate::Ctx;

#[derive(Args, Debug)]
pub struct RoomsArgs {
    /// Drill into one room's active tickets instead of the map.
    pub room: Option<String>,
}

pub fn run_rooms(args: &RoomsArgs, ctx: &Ctx) -> anyhow::Result<()> {
    if let Some(number) = &args.room {
        return room_detail(number, ctx);
    }
    map_overview(ctx, &ctx.config)
}

fn map_overview(ctx: &Ctx, config: &TrackerConfig) -> anyhow::Result<()> {
    let index = RecurrenceIndex::build(ctx.store.tickets(), &config.analytics, ctx.store.now());
    let map = room_map(&room::catalog(), ctx.store.tickets(), &index);

    if ctx.output == OutputMode::Json {
        return render_json(&map);
    }

    let mut out = std::io::stdout().lock();
    writeln!(
        out,
        "{:<6} {:<9} {:>7} {:>9} {:>9} {:>10}",
        "ROOM", "STATE", "ACTIVE", "OCCUPIED", "HOTSPOT", "RECURRENT"
    )?;
    pretty_rule(&mut out)?;
    for cell in &map {
        let state = match cell.condition {
            RoomCondition::Ok => "ok",
            RoomCondition::Pending => "pending",
            RoomCondition::Critical => "critical",
        };
        writeln!(
            out,
            "{:<6} {:<9} {:>7} {:>9} {:>9} {:>10}",
            cell.number,
            state,
            cell.active,
            if cell.occupied { "yes" } else { "" },
            if cell.hotspot { "HOT" } else { "" },
            if cell.recurrent { "R" } else { "" }
        )?;
    }
    Ok(())
}

fn room_detail(number: &str, ctx: &Ctx) -> anyhow::Result<()> {
    let active = rank::room_active_by_priority(ctx.store.tickets(), number);

    if ctx.output == OutputMode::Json {
        return render_json(&active);
    }

    let mut out = std::io::stdout().lock();
    if active.is_empty() {
        writeln!(out, "room {number}: no active tickets")?;
        return Ok(());
    }

    writeln!(out, "room {number}: {} active ticket(s)", active.len())?;
    pretty_rule(&mut out)?;
    for t in active {
        writeln!(
            out,
            "  {:>4}  {}  {} ({})  {}",
            t.priority, t.id, t.asset, t.issue, t.status
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::RoomsArgs;
    use clap::Parser;

    #[derive(Parser)]
    struct Wrapper {
        #[command(flatten)]
        args: RoomsArgs,
    }

    #[test]
    fn room_argument_is_optional() {
        let w = Wrapper::parse_from(["test"]);
        assert!(w.args.room.is_none());

        let w = Wrapper::parse_from(["test", "105"]);
        assert_eq!(w.args.room.as_deref(), Some("105"));
    }
}
