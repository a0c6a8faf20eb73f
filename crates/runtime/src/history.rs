use std::{
    env,
    fs::{self, File, OpenOptions},
    io::{self, BufRead, BufReader, Write},
    path::PathBuf,
};

use chrono::{DateTime, Utc};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::PROGRAM_NAME;

pub const HISTORY_VERSION: u8 = 1;

pub const HISTORY_DISABLED_ENV: &str = "SWEEPER_HISTORY";

const HISTORY_FILE_NAME: &str = "history.log";

/// One completed housekeeping run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RunEvent {
    /// Schema version
    pub version: u8,

    /// When the run finished
    pub timestamp: DateTime<Utc>,

    pub source: PathBuf,
    pub destination: PathBuf,
    pub threshold_days: u32,

    /// Regular files found in the source directory.
    pub scanned: usize,
    /// Files deleted from the source.
    pub retired: usize,
    /// Files copied to the destination.
    pub copied: usize,
    pub bytes_copied: u64,

    pub duration_ms: u64,
}

/// Counters reported by a finished run, without the bookkeeping fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunTotals {
    pub scanned: usize,
    pub retired: usize,
    pub copied: usize,
    pub bytes_copied: u64,
}

impl RunEvent {
    pub fn new(
        source: PathBuf,
        destination: PathBuf,
        threshold_days: u32,
        totals: RunTotals,
        duration_ms: u64,
    ) -> Self {
        Self {
            version: HISTORY_VERSION,
            timestamp: Utc::now(),
            source,
            destination,
            threshold_days,
            scanned: totals.scanned,
            retired: totals.retired,
            copied: totals.copied,
            bytes_copied: totals.bytes_copied,
            duration_ms,
        }
    }
}

pub struct HistoryStore {
    path: PathBuf,
}

pub fn state_dir() -> Option<PathBuf> {
    if let Ok(xdg_state) = env::var("XDG_STATE_HOME")
        && !xdg_state.is_empty()
    {
        return Some(PathBuf::from(xdg_state).join(PROGRAM_NAME));
    }

    dirs::state_dir()
        .or_else(dirs::data_local_dir)
        .map(|p| p.join(PROGRAM_NAME))
}

pub fn history_log_path() -> Option<PathBuf> {
    state_dir().map(|d| d.join(HISTORY_FILE_NAME))
}

fn history_disabled() -> bool {
    match env::var(HISTORY_DISABLED_ENV) {
        Ok(val) => val == "0" || val.eq_ignore_ascii_case("false"),
        Err(_) => false,
    }
}

impl HistoryStore {
    /// Returns `None` when history is disabled or no state directory exists.
    pub fn new() -> Option<Self> {
        if history_disabled() {
            return None;
        }

        let path = history_log_path()?;
        Some(Self { path })
    }

    /// Create a history store with a custom path (for testing).
    #[cfg(test)]
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    #[cfg(test)]
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    /// Best effort: a failed append is logged and swallowed so it never
    /// turns a successful run into a failed one.
    pub fn record_run(&self, event: &RunEvent) {
        if let Err(e) = self.append_event(event) {
            debug!("Failed to record run history: {}", e);
        }
    }

    fn append_event(&self, event: &RunEvent) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut line = serde_json::to_string(event).map_err(io::Error::other)?;
        line.push('\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        file.write_all(line.as_bytes())?;

        Ok(())
    }

    pub fn iter_events(&self) -> impl Iterator<Item = RunEvent> {
        self.read_events().into_iter().flatten()
    }

    fn read_events(&self) -> Option<Vec<RunEvent>> {
        let file = File::open(&self.path).ok()?;
        let reader = BufReader::new(file);
        let mut events = Vec::new();
        for line in reader.lines() {
            match line {
                Ok(line) => match serde_json::from_str(&line) {
                    Ok(ev) => events.push(ev),
                    Err(e) => debug!("Skipping malformed history line: {e}"),
                },
                Err(e) => {
                    debug!("Error reading history log: {e}");
                    break;
                }
            }
        }
        Some(events)
    }

    /// Newest first.
    pub fn recent_runs(&self, limit: usize) -> Vec<RunEvent> {
        let mut runs: Vec<RunEvent> = self.iter_events().collect();
        runs.reverse();
        runs.truncate(limit);
        runs
    }

    pub fn count(&self) -> usize {
        self.iter_events().count()
    }

    pub fn clear(&self) -> io::Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
#[path = "history_tests.rs"]
mod tests;
