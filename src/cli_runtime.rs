use anyhow::Result;
use clap::Parser;

use crate::cli_subcommands::Commands;

#[derive(Parser)]
#[command(name = "snapfeed")]
#[command(about = "Terminal client for ephemeral snap messages", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

pub(crate) fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        // No subcommand: the interactive feed screen.
        None => snapfeed::tui::run(),
        Some(command) => crate::cli_exec::handle_command(command),
    }
}
