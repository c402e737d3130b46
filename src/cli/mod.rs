//! Command-line interface layer: argument parsing, command dispatch and
//! report printing.

use anyhow::Result;

mod args;
mod commands;
mod exit_status;
mod report;

pub use args::{Arguments, CheckArgs, Command, OutputFormat};
pub use commands::CheckOutcome;
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let Some(Arguments { command }) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    match command {
        Some(Command::Check(cmd)) => {
            let outcome = commands::check::check(&cmd)?;
            report::print(&outcome, cmd.format, cmd.verbose);
            Ok(ExitStatus::from_report(&outcome.report))
        }
        Some(Command::Init) => commands::init::init(),
        None => Ok(ExitStatus::Success),
    }
}
