pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod logging;
pub mod packages;
pub mod ui;
pub mod utils;

use clap::Parser;
use std::process::exit;

/// Run the CLI entrypoint.
pub fn run_cli() {
    // 1. Parse; usage errors exit 1 like any other failure
    let args = match cli::args::Cli::try_parse() {
        Ok(args) => args,
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            tracing::subscriber::with_default(logging::subscriber(false), || {
                tracing::error!(err = %e, "error");
            });
            exit(1);
        }
        Err(e) => e.exit(),
    };

    // 2. Run with the logger scoped to this invocation
    let code = tracing::subscriber::with_default(logging::subscriber(args.global.debug), || {
        match cli::dispatcher::dispatch(&args) {
            Ok(()) => 0,
            Err(e) => {
                tracing::error!(err = %e, "error");
                ui::error(&e.to_string());
                1
            }
        }
    });

    exit(code);
}
