//! The `dump` subcommand for the sevm binary

use super::SevmSubcommandDispatcher;
use anyhow::Result;
use clap::Args;
use sevm_exec::{Memory, TreeMemory};
use std::{fs, path::PathBuf};

/// Command line arguments for `sevm dump`
#[derive(Args, Debug)]
#[command(author, version, about)]
pub(crate) struct DumpArgs {
    /// The path to the input JSON memory snapshot.
    #[arg(long, short)]
    input: PathBuf,
}

impl SevmSubcommandDispatcher for DumpArgs {
    fn dispatch(self) -> Result<()> {
        tracing::info!(target: "sevm-cli::dump", "Loading memory snapshot from {}", self.input.display());

        let raw = fs::read(&self.input)?;
        let memory: TreeMemory = serde_json::from_slice(&raw)?;

        tracing::info!(target: "sevm-cli::dump", "Loaded snapshot with {} materialized entries", memory.entry_count());

        print!("{}", memory.dump());
        Ok(())
    }
}
