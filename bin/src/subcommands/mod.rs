//! Subcommands for the `sevm` binary

use anyhow::Result;
use clap::Subcommand;

mod dump;
mod write_word;

pub(crate) trait SevmSubcommandDispatcher {
    /// Dispatches the subcommand
    fn dispatch(self) -> Result<()>;
}

/// The subcommands for the `sevm` binary
#[derive(Subcommand, Debug)]
pub(crate) enum SevmSubcommand {
    /// Print the contents of a memory snapshot in ascending offset order
    Dump(dump::DumpArgs),
    /// Write a word into a memory snapshot
    WriteWord(write_word::WriteWordArgs),
}

impl SevmSubcommandDispatcher for SevmSubcommand {
    fn dispatch(self) -> Result<()> {
        match self {
            SevmSubcommand::Dump(args) => args.dispatch(),
            SevmSubcommand::WriteWord(args) => args.dispatch(),
        }
    }
}
