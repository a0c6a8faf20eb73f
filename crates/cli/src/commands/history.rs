use std::process::ExitCode;

use clap::Args;
use log::{error, info};
use sweeper_runtime::history::{HistoryStore, RunEvent};

#[derive(Debug, Args)]
pub struct HistoryArgs {
    /// Number of runs to display
    #[arg(long, short = 'n', default_value = "20")]
    pub limit: usize,

    /// Clear all history
    #[arg(long)]
    pub clear: bool,
}

pub fn run(args: HistoryArgs) -> ExitCode {
    let store = match HistoryStore::new() {
        Some(s) => s,
        None => {
            info!("[info] History is currently disabled");
            return ExitCode::from(0);
        }
    };

    if args.clear {
        return match store.clear() {
            Ok(_) => {
                println!("History cleared");
                ExitCode::from(0)
            }
            Err(e) => {
                error!("[error] Failed to clear history: {}", e);
                ExitCode::from(1)
            }
        };
    }

    let runs = store.recent_runs(args.limit);

    if runs.is_empty() {
        println!("No runs recorded yet.");
        return ExitCode::from(0);
    }

    println!(
        "{:<20}  {:>7}  {:>7}  {:>6}  {:>12}  {:>8}  SOURCE",
        "TIMESTAMP", "SCANNED", "RETIRED", "COPIED", "BYTES", "TIME"
    );
    println!("{}", "-".repeat(88));

    for event in &runs {
        println!("{}", format_row(event));
    }

    let total = store.count();
    if total > args.limit {
        println!(
            "\n({} more entries, use --limit to show more)",
            total - args.limit
        );
    }

    ExitCode::from(0)
}

fn format_row(event: &RunEvent) -> String {
    let ts = event.timestamp.format("%Y-%m-%d %H:%M:%S").to_string();

    format!(
        "{:<20}  {:>7}  {:>7}  {:>6}  {:>12}  {:>6}ms  {}",
        ts,
        event.scanned,
        event.retired,
        event.copied,
        event.bytes_copied,
        event.duration_ms,
        event.source.display()
    )
}
