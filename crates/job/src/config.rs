use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Local, TimeDelta};
use sweeper_runtime::{
    DEFAULT_THRESHOLD_DAYS, DESTINATION_DIR_NAME, FROM_LOG_FILE_NAME, SOURCE_DIR_NAME,
    TO_LOG_FILE_NAME, default_base_dir,
};

/// Everything one run needs, fixed before the first file is touched.
#[derive(Debug, Clone)]
pub struct JobConfig {
    /// Directory whose top-level files are retired or copied
    pub source: PathBuf,
    /// Directory receiving copies of fresh files
    pub destination: PathBuf,
    /// Inventory of the source as scanned
    pub from_log: PathBuf,
    /// Inventory of the files that were copied
    pub to_log: PathBuf,
    /// Files created more than this many days before `now` are retired
    pub threshold_days: u32,
    /// Single clock reading shared by every age comparison in the run
    pub now: DateTime<Local>,
    /// Write both inventories sorted by name instead of listing order
    pub sorted_logs: bool,
}

impl JobConfig {
    /// Standard layout under the default base directory.
    pub fn with_defaults(now: DateTime<Local>) -> Self {
        Self::under_base(&default_base_dir(), now)
    }

    /// `base/backupsFrom`, `base/backupsTo` and the two logs next to them,
    /// with the default threshold.
    pub fn under_base(base: &Path, now: DateTime<Local>) -> Self {
        Self {
            source: base.join(SOURCE_DIR_NAME),
            destination: base.join(DESTINATION_DIR_NAME),
            from_log: base.join(FROM_LOG_FILE_NAME),
            to_log: base.join(TO_LOG_FILE_NAME),
            threshold_days: DEFAULT_THRESHOLD_DAYS,
            now,
            sorted_logs: false,
        }
    }

    /// `now - threshold_days`, as an exact number of 24h periods.
    pub fn cutoff(&self) -> Result<DateTime<Local>> {
        TimeDelta::try_days(i64::from(self.threshold_days))
            .and_then(|age| self.now.checked_sub_signed(age))
            .with_context(|| {
                format!(
                    "Threshold of {} days is out of range",
                    self.threshold_days
                )
            })
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
