use anyhow::Result;

use super::args::{Arguments, Command};
use super::commands::{self, CommandResult};

/// Dispatch a parsed command to its implementation.
pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Export(cmd)) => commands::export::export(cmd),
        Some(Command::ClearCustomizations(cmd)) => commands::clear::clear_customizations(cmd),
        Some(Command::Patterns(cmd)) => commands::patterns::patterns(cmd),
        Some(Command::Init) => commands::init::init(),
        None => anyhow::bail!("No command provided. Use --help to see available commands."),
    }
}
