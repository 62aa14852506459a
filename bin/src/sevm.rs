//! The `sevm` binary: operator tooling over execution memory snapshots.

use anyhow::Result;
use clap::{ArgAction, Parser};
use subcommands::{SevmSubcommand, SevmSubcommandDispatcher};
use tracing::Level;

mod subcommands;

/// Command line arguments for `sevm`.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Verbosity level (0-4)
    #[arg(short, action = ArgAction::Count)]
    v: u8,

    /// The subcommand to run
    #[command(subcommand)]
    subcommand: SevmSubcommand,
}

fn main() -> Result<()> {
    let Args { v, subcommand } = Args::parse();
    init_tracing_subscriber(v)?;
    subcommand.dispatch()
}

/// Initializes the tracing subscriber
///
/// ## Takes
/// - `verbosity_level`: The verbosity level (0-4)
///
/// ## Returns
/// - `Ok(())` if the tracing subscriber was initialized successfully.
/// - `Err(_)` if the tracing subscriber could not be initialized.
fn init_tracing_subscriber(verbosity_level: u8) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(match verbosity_level {
            0 => Level::ERROR,
            1 => Level::WARN,
            2 => Level::INFO,
            3 => Level::DEBUG,
            _ => Level::TRACE,
        })
        .finish();
    tracing::subscriber::set_global_default(subscriber).map_err(|e| anyhow::anyhow!(e))
}
