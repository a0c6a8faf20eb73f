pub mod history;
pub mod run;

use clap::Subcommand;
pub use history::HistoryArgs;
pub use run::RunArgs;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Retire stale files from the source and copy the rest to the destination.
    ///
    /// Example:
    ///   sweeper run
    ///   sweeper run --days 7 --base-dir /home/ops
    ///   sweeper run --dry-run --sorted
    Run(RunArgs),

    /// Show past runs.
    History(HistoryArgs),
}
