//! `ik wait-part` / `ik wait-vendor`: park a ticket on an external
//! dependency. Both record what is being waited on so the buy/outsource
//! lists stay actionable.

use clap::Args;

use innkeep_core::model::ticket::Status;
use innkeep_core::model::ticket_id::TicketId;
use innkeep_core::store::TicketPatch;

use crate::output::render_success;
use crate::Ctx;

#[derive(Args, Debug)]
pub struct WaitPartArgs {
    /// Ticket identifier, e.g. T-1001.
    pub id: String,

    /// Name of the part to order.
    #[arg(long)]
    pub part: String,
}

#[derive(Args, Debug)]
pub struct WaitVendorArgs {
    /// Ticket identifier, e.g. T-1001.
    pub id: String,

    /// Kind of vendor required (e.g. "HVAC contractor").
    #[arg(long)]
    pub vendor: String,
}

pub fn run_wait_part(args: &WaitPartArgs, ctx: &mut Ctx) -> anyhow::Result<()> {
    let id = TicketId::new_unchecked(args.id.as_str());
    let label = format!("Waiting for part: {}", args.part);
    let patch = TicketPatch {
        status: Some(Status::WaitingPart),
        needs_part: Some(true),
        part_name: Some(args.part.clone()),
        ..TicketPatch::default()
    };
    if let Err(err) = ctx.store.update(&id, patch, ctx.role, &label) {
        return Err(super::fail(ctx.output, &err));
    }
    render_success(ctx.output, &format!("{} is waiting for part: {}", id, args.part))
}

pub fn run_wait_vendor(args: &WaitVendorArgs, ctx: &mut Ctx) -> anyhow::Result<()> {
    let id = TicketId::new_unchecked(args.id.as_str());
    let label = format!("Marked for vendor: {}", args.vendor);
    let patch = TicketPatch {
        status: Some(Status::Vendor),
        needs_vendor: Some(true),
        vendor_type: Some(args.vendor.clone()),
        ..TicketPatch::default()
    };
    if let Err(err) = ctx.store.update(&id, patch, ctx.role, &label) {
        return Err(super::fail(ctx.output, &err));
    }
    render_success(
        ctx.output,
        &format!("{} is waiting on vendor: {}", id, args.vendor),
    )
}
