//! The `write-word` subcommand for the sevm binary

use super::SevmSubcommandDispatcher;
use anyhow::{Context, Result};
use clap::Args;
use sevm_exec::{Memory, Offset, TreeMemory, Word};
use std::{fs, path::PathBuf};

/// Command line arguments for `sevm write-word`
#[derive(Args, Debug)]
#[command(author, version, about)]
pub(crate) struct WriteWordArgs {
    /// The path to the input JSON memory snapshot. Starts from an empty
    /// memory if not provided.
    #[arg(long, short)]
    input: Option<PathBuf>,

    /// The offset of the word's least significant byte.
    #[arg(long)]
    offset: Offset,

    /// The width of the word in bytes (1-8).
    #[arg(long)]
    width: i64,

    /// The value to write.
    #[arg(long)]
    value: Word,

    /// The output path to write the JSON snapshot to. Snapshot is dumped to
    /// stdout if set to `-`.
    #[arg(long, short)]
    output: String,
}

impl SevmSubcommandDispatcher for WriteWordArgs {
    fn dispatch(self) -> Result<()> {
        let mut memory: TreeMemory = match self.input {
            Some(ref path) => {
                tracing::info!(target: "sevm-cli::write-word", "Loading memory snapshot from {}", path.display());
                serde_json::from_slice(&fs::read(path)?)?
            }
            None => TreeMemory::default(),
        };

        memory.set_word(self.offset, self.width, self.value).with_context(|| {
            format!("Failed to write {} byte word at offset {}", self.width, self.offset)
        })?;

        tracing::info!(
            target: "sevm-cli::write-word",
            "Wrote {:#x} at offset {} ({} bytes, {} entries materialized)",
            self.value,
            self.offset,
            self.width,
            memory.entry_count()
        );

        if self.output == "-" {
            println!("{}", serde_json::to_string(&memory)?);
        } else {
            fs::write(&self.output, serde_json::to_vec(&memory)?)?;
            tracing::info!(target: "sevm-cli::write-word", "Wrote snapshot to {}", self.output);
        }

        Ok(())
    }
}
