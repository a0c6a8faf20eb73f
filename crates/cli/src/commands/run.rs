use std::{
    io::{self, Write},
    path::PathBuf,
    process::ExitCode,
    time::Instant,
};

use anyhow::Result;
use chrono::{DateTime, Local};
use clap::Args;
use log::error;
use sweeper_fs::{FileRecord, format_timestamp};
use sweeper_job::{Disposition, JobConfig, plan};
use sweeper_runtime::{
    DEFAULT_THRESHOLD_DAYS, SUCCESS_MESSAGE, default_base_dir,
    history::{HistoryStore, RunEvent},
};

#[derive(Debug, Args)]
pub struct RunArgs {
    /// Directory holding backupsFrom/, backupsTo/ and both logs
    /// (defaults to $SWEEPER_BASE_DIR, then $HOME)
    #[arg(long)]
    pub base_dir: Option<PathBuf>,

    /// Source directory override
    #[arg(long)]
    pub source: Option<PathBuf>,

    /// Destination directory override
    #[arg(long)]
    pub dest: Option<PathBuf>,

    /// Path of the source inventory log
    #[arg(long)]
    pub from_log: Option<PathBuf>,

    /// Path of the copied inventory log
    #[arg(long)]
    pub to_log: Option<PathBuf>,

    /// Retire files created more than this many days ago
    #[arg(long, short = 'd', default_value_t = DEFAULT_THRESHOLD_DAYS)]
    pub days: u32,

    /// Sort both logs by file name instead of directory order
    #[arg(long)]
    pub sorted: bool,

    /// Show what would be retired or copied without changing anything
    #[arg(long, short = 'n')]
    pub dry_run: bool,
}

impl RunArgs {
    pub fn job_config(&self, now: DateTime<Local>) -> JobConfig {
        let base = self.base_dir.clone().unwrap_or_else(default_base_dir);
        let defaults = JobConfig::under_base(&base, now);

        JobConfig {
            source: self.source.clone().unwrap_or(defaults.source),
            destination: self.dest.clone().unwrap_or(defaults.destination),
            from_log: self.from_log.clone().unwrap_or(defaults.from_log),
            to_log: self.to_log.clone().unwrap_or(defaults.to_log),
            threshold_days: self.days,
            now,
            sorted_logs: self.sorted,
        }
    }
}

pub fn run(args: RunArgs) -> ExitCode {
    let stdout = io::stdout();
    run_to(args, &mut stdout.lock())
}

/// Runs the command with its report going to `out`.
fn run_to<W: Write>(args: RunArgs, out: &mut W) -> ExitCode {
    match execute(args, out) {
        Ok(code) => code,
        Err(e) => {
            error!("[error] {e:#}");
            eprintln!("[run] {e:#}");
            ExitCode::from(2)
        }
    }
}

fn execute<W: Write>(args: RunArgs, out: &mut W) -> Result<ExitCode> {
    let started = Instant::now();
    let config = args.job_config(Local::now());

    if args.dry_run {
        let planned = plan(&config)?;
        print_plan(out, &planned)?;
        return Ok(ExitCode::SUCCESS);
    }

    let inventory = sweeper_job::run(&config)?;

    if let Some(store) = HistoryStore::new() {
        let elapsed = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        store.record_run(&RunEvent::new(
            config.source.clone(),
            config.destination.clone(),
            config.threshold_days,
            inventory.totals(),
            elapsed,
        ));
    }

    writeln!(out, "{SUCCESS_MESSAGE}")?;

    Ok(ExitCode::SUCCESS)
}

fn print_plan<W: Write>(out: &mut W, planned: &[(FileRecord, Disposition)]) -> io::Result<()> {
    writeln!(out, "{:<7}  {:>12}  {:<26}  NAME", "ACTION", "SIZE", "CREATED")?;
    writeln!(out, "{}", "-".repeat(72))?;

    for (record, disposition) in planned {
        writeln!(
            out,
            "{:<7}  {:>12}  {:<26}  {}",
            action_label(*disposition),
            record.size,
            format_timestamp(&record.creation_time),
            record.name
        )?;
    }

    let retire = planned
        .iter()
        .filter(|(_, d)| *d == Disposition::Retire)
        .count();
    writeln!(
        out,
        "\n(dry run: {} to retire, {} to copy)",
        retire,
        planned.len() - retire
    )
}

fn action_label(disposition: Disposition) -> &'static str {
    match disposition {
        Disposition::Retire => "retire",
        Disposition::Copy => "copy",
    }
}

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;
