use std::process::ExitCode;

use anyhow::Result;

mod args;
mod commands;
mod exit_status;
mod logger;
mod report;

pub use args::{Arguments, Command};
pub use exit_status::ExitStatus;

use commands::{decode::decode, generate::generate, init::init};

pub fn run_cli(args: Arguments) -> Result<ExitCode> {
    logger::init(args.verbose());

    let Some(Arguments { command }) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success.into());
    };

    let status = match command {
        Some(Command::Generate(cmd)) => generate(cmd)?,
        Some(Command::Decode(cmd)) => decode(cmd)?,
        Some(Command::Init) => init()?,
        None => anyhow::bail!("No command provided. Use --help to see available commands."),
    };

    Ok(status.into())
}
