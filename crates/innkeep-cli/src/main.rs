#![forbid(unsafe_code)]

mod cmd;
mod output;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::str::FromStr;
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use innkeep_core::config::{self, TrackerConfig};
use innkeep_core::model::ticket::Role;
use innkeep_core::store::{FileSnapshots, LoadOutcome, SystemClock, TicketStore};
use output::OutputMode;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "innkeep: maintenance ticket tracking for small hotels",
    long_about = None
)]
pub struct Cli {
    /// Enable verbose logging.
    #[arg(short, long)]
    verbose: bool,

    /// Emit JSON output instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// Acting role recorded on audit events:
    /// management, reception, cleaning, or maintenance.
    #[arg(long, global = true, default_value = "management")]
    role: String,

    /// Path to the ticket snapshot file (defaults to the user data dir).
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    /// Path to the config file (defaults to the user config dir).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        next_help_heading = "Report",
        about = "Report a new maintenance issue",
        after_help = "EXAMPLES:\n    # Reception reports an occupied-room outage\n    ik --role reception create --room 105 --asset air-conditioning \\\n        --issue wont-turn-on --description \"Remote does not respond\" \\\n        --urgency high --impact blocking --occupied\n\n    # Emit machine-readable output\n    ik create --room 112 --asset plumbing --issue leaking \\\n        --description \"Dripping sink\" --json"
    )]
    Create(cmd::create::CreateArgs),

    #[command(
        next_help_heading = "Report",
        about = "Append a note to a ticket"
    )]
    Note(cmd::note::NoteArgs),

    #[command(
        next_help_heading = "Report",
        about = "Assign a technician to a ticket"
    )]
    Assign(cmd::assign::AssignArgs),

    #[command(
        next_help_heading = "Lifecycle",
        about = "Start work on a ticket",
        after_help = "EXAMPLES:\n    # Maintenance picks up a ticket\n    ik --role maintenance start T-1001"
    )]
    Start(cmd::start::StartArgs),

    #[command(
        next_help_heading = "Lifecycle",
        about = "Park a ticket waiting on a spare part"
    )]
    WaitPart(cmd::block::WaitPartArgs),

    #[command(
        next_help_heading = "Lifecycle",
        about = "Escalate a ticket to an outside vendor"
    )]
    WaitVendor(cmd::block::WaitVendorArgs),

    #[command(
        next_help_heading = "Lifecycle",
        about = "Mark a ticket resolved, pending verification"
    )]
    Resolve(cmd::resolve::ResolveArgs),

    #[command(
        next_help_heading = "Lifecycle",
        about = "Verify and close a resolved ticket",
        after_help = "EXAMPLES:\n    # Both checklist confirmations are required\n    ik --role management verify T-1001 --area-clean --asset-working"
    )]
    Verify(cmd::verify::VerifyArgs),

    #[command(
        next_help_heading = "Read",
        about = "List tickets",
        after_help = "EXAMPLES:\n    # Active tickets (default)\n    ik list\n\n    # Filter by status or room\n    ik list --status waiting-part\n    ik list --room 105\n\n    # Emit machine-readable output\n    ik list --json"
    )]
    List(cmd::list::ListArgs),

    #[command(next_help_heading = "Read", about = "Show one ticket with its audit log")]
    Show(cmd::show::ShowArgs),

    #[command(
        next_help_heading = "Read",
        about = "Management report: KPIs, staffing, ranking, decision lists"
    )]
    Report(cmd::report::ReportArgs),

    #[command(
        next_help_heading = "Read",
        about = "Room map states, or one room's active tickets"
    )]
    Rooms(cmd::rooms::RoomsArgs),

    #[command(
        next_help_heading = "Demo",
        about = "Run a canned demo scenario",
        after_help = "EXAMPLES:\n    ik scenario guest-complaint\n    ik scenario block-part"
    )]
    Scenario(cmd::scenario::ScenarioArgs),

    #[command(next_help_heading = "Data", about = "Export the collection as CSV")]
    Export(cmd::export::ExportArgs),

    #[command(next_help_heading = "Data", about = "Discard the snapshot and restore seed data")]
    Reset(cmd::reset::ResetArgs),

    #[command(next_help_heading = "Data", about = "Generate shell completions")]
    Completions(cmd::completions::CompletionsArgs),
}

/// Everything a command handler needs.
pub struct Ctx {
    pub store: TicketStore<SystemClock>,
    pub config: TrackerConfig,
    pub role: Role,
    pub output: OutputMode,
}

fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn snapshot_path(cli: &Cli) -> Result<PathBuf> {
    if let Some(path) = &cli.store {
        return Ok(path.clone());
    }
    config::default_snapshot_path().context("could not resolve a data directory for the snapshot")
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let output = output::resolve_output_mode(cli.json);

    // Completions never touch the store.
    if let Commands::Completions(args) = &cli.command {
        return cmd::completions::run_completions(args);
    }

    let role = Role::from_str(&cli.role)
        .with_context(|| format!("invalid role '{}'", cli.role))?;
    let config = config::load_config(cli.config.as_deref())?;

    let path = snapshot_path(&cli)?;
    debug!(path = %path.display(), "opening ticket store");
    let repo = FileSnapshots::new(&path);
    let (store, outcome) = TicketStore::open(Box::new(repo), SystemClock)
        .map_err(|err| anyhow::anyhow!("failed to open ticket store: {err}"))?;

    if outcome == LoadOutcome::CorruptSnapshotRestored {
        eprintln!(
            "warning: snapshot at {} was unreadable; seed data restored",
            path.display()
        );
    }

    let mut ctx = Ctx {
        store,
        config,
        role,
        output,
    };

    match &cli.command {
        Commands::Create(args) => cmd::create::run_create(args, &mut ctx),
        Commands::Note(args) => cmd::note::run_note(args, &mut ctx),
        Commands::Assign(args) => cmd::assign::run_assign(args, &mut ctx),
        Commands::Start(args) => cmd::start::run_start(args, &mut ctx),
        Commands::WaitPart(args) => cmd::block::run_wait_part(args, &mut ctx),
        Commands::WaitVendor(args) => cmd::block::run_wait_vendor(args, &mut ctx),
        Commands::Resolve(args) => cmd::resolve::run_resolve(args, &mut ctx),
        Commands::Verify(args) => cmd::verify::run_verify(args, &mut ctx),
        Commands::List(args) => cmd::list::run_list(args, &ctx),
        Commands::Show(args) => cmd::show::run_show(args, &ctx),
        Commands::Report(args) => cmd::report::run_report(args, &ctx),
        Commands::Rooms(args) => cmd::rooms::run_rooms(args, &ctx),
        Commands::Scenario(args) => cmd::scenario::run_scenario(args, &mut ctx),
        Commands::Export(args) => cmd::export::run_export(args, &ctx),
        Commands::Reset(args) => cmd::reset::run_reset(args, &mut ctx),
        Commands::Completions(_) => unreachable!("handled before store open"),
    }
}
