//! Command-line layer: argument parsing, dispatch and console reporting.

use anyhow::Result;

pub mod args;
pub mod commands;
mod exit_status;
pub mod report;

pub use args::{Arguments, Command};
pub use exit_status::ExitStatus;

use commands::{collect::collect, init::init};

/// Dispatches to the command handler.
///
/// Without a subcommand, help is printed and the run succeeds.
pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let Some(Arguments { command }) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    match command {
        Some(Command::Collect(cmd)) => collect(cmd),
        Some(Command::Init) => init(),
        None => Ok(ExitStatus::Success),
    }
}
