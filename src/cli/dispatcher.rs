//! Command dispatcher
//!
//! Routes CLI commands to their appropriate handlers.

use crate::cli::args::{Cli, Command};
use crate::commands;
use crate::error::Result;
use clap::CommandFactory;

/// Dispatch the parsed CLI command to the appropriate handler
pub fn dispatch(args: &Cli) -> Result<()> {
    match &args.command {
        Some(Command::Update) => commands::update::run(),
        Some(Command::List) => commands::list::run(),
        None => {
            // No subcommand: behave like --help
            let _ = Cli::command().print_help();
            println!();
            Ok(())
        }
    }
}
