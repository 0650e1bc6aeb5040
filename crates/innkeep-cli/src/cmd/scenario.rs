//! `ik scenario`: run one canned demo flow.

use clap::Args;
use std::str::FromStr;

use innkeep_sim::Scenario;

use crate::output::{render_json, render_success};
use crate::Ctx;

#[derive(Args, Debug)]
pub struct ScenarioArgs {
    /// Scenario name: guest-complaint, cleaning-report, block-part, or
    /// block-vendor.
    pub name: String,
}

pub fn run_scenario(args: &ScenarioArgs, ctx: &mut Ctx) -> anyhow::Result<()> {
    let scenario = Scenario::from_str(&args.name)?;
    let id = match innkeep_sim::run(&mut ctx.store, scenario) {
        Ok(id) => id,
        Err(err) => return Err(super::fail(ctx.output, &err)),
    };

    if ctx.output.is_json() {
        let ticket = ctx.store.get(&id);
        return render_json(&ticket);
    }
    render_success(ctx.output, &format!("Scenario {scenario} touched {id}"))
}
