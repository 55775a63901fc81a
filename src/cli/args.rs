//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `generate`: compact translations and write the translation code
//! - `decode`: read translation code back into table JSON
//! - `init`: initialize the jsoncode configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Generate(cmd)) => cmd.common.verbose,
            Some(Command::Decode(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct GenerateCommand {
    /// Per-language translations JSON (overrides config file)
    #[arg(long)]
    pub data: Option<PathBuf>,

    /// Words referenced by source code JSON (overrides config file)
    #[arg(long)]
    pub words: Option<PathBuf>,

    /// Output file for the translation code (overrides config file)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Also write the compacted table as JSON (overrides config file)
    #[arg(long)]
    pub table: Option<PathBuf>,

    /// Fail if the output file is not up to date instead of writing it
    #[arg(long, conflicts_with = "stdout")]
    pub check: bool,

    /// Print the translation code instead of writing it
    #[arg(long)]
    pub stdout: bool,

    /// Number of spaces per indentation level
    #[arg(long, default_value_t = 4)]
    pub indent: usize,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct DecodeCommand {
    /// Translation code file produced by `generate`
    pub file: PathBuf,

    /// Print the per-language translations and untranslated words instead
    #[arg(long)]
    pub expand: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compact translations into diff-stable translation code
    Generate(GenerateCommand),
    /// Read translation code back into its compacted table
    Decode(DecodeCommand),
    /// Initialize a new .jsoncoderc.json configuration file
    Init,
}
