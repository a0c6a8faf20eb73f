use std::process::ExitCode;

use clap::Parser;

mod commands;

use commands::Command;
use sweeper_runtime::logging;

#[derive(Debug, Parser)]
#[command(
    name = "sweeper",
    version,
    about = "Retire stale files and copy fresh ones to a backup directory",
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

fn main() -> ExitCode {
    logging::init().ok();

    let cli = Cli::parse();
    match cli.command {
        Command::Run(args) => commands::run::run(args),
        Command::History(args) => commands::history::run(args),
    }
}
