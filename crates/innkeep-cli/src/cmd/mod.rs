//! One module per subcommand: an `Args` struct plus a `run_*` handler.

pub mod assign;
pub mod block;
pub mod completions;
pub mod create;
pub mod export;
pub mod list;
pub mod note;
pub mod report;
pub mod reset;
pub mod resolve;
pub mod rooms;
pub mod scenario;
pub mod show;
pub mod start;
pub mod verify;

use innkeep_core::error::StoreError;

use crate::output::{render_error, CliError, OutputMode};

/// Render a store error in the active mode and turn it into a process
/// failure.
pub fn fail(output: OutputMode, err: &StoreError) -> anyhow::Error {
    if let Err(render_err) = render_error(output, &CliError::from_store(err)) {
        return render_err;
    }
    anyhow::anyhow!("{err}")
}
