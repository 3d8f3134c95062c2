use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "local-package-updater",
    about = "Update locally installed developer tooling",
    long_about = "Update locally installed developer tooling by running each package manager's own update command (apt, brew, gcloud, fisher, krew)",
    version,
    next_line_help = false,
    term_width = 80
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalFlags,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Parser, Debug)]
pub struct GlobalFlags {
    /// Enable debug logging
    #[arg(short = 'd', long, global = true)]
    pub debug: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Update every installed package manager, privileged ones first
    Update,

    /// Show the known package managers and whether they are installed
    List,
}
