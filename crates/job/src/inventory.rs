use chrono::{DateTime, Local};
use sweeper_fs::FileRecord;
use sweeper_runtime::history::RunTotals;

/// What happens to a scanned file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Older than the cutoff: delete from the source.
    Retire,
    /// Copy to the destination and keep the original.
    Copy,
}

/// Only the creation time is compared; a file created exactly at the
/// cutoff is kept.
pub fn classify(record: &FileRecord, cutoff: &DateTime<Local>) -> Disposition {
    if record.creation_time < *cutoff {
        Disposition::Retire
    } else {
        Disposition::Copy
    }
}

/// The two inventories of a run.
///
/// Every record lands in `source`; copied records also land in `copied`.
/// A record can only enter through one of the `record_*` methods, so no file
/// is ever both retired and copied.
#[derive(Debug, Default)]
pub struct Inventory {
    source: Vec<FileRecord>,
    copied: Vec<FileRecord>,
    retired: usize,
    bytes_copied: u64,
}

impl Inventory {
    pub fn record_retired(&mut self, record: FileRecord) {
        self.source.push(record);
        self.retired += 1;
    }

    pub fn record_copied(&mut self, record: FileRecord, bytes: u64) {
        self.copied.push(record.clone());
        self.source.push(record);
        self.bytes_copied += bytes;
    }

    /// Every regular file seen in the source directory.
    pub fn source(&self) -> &[FileRecord] {
        &self.source
    }

    /// Files copied to the destination.
    pub fn copied(&self) -> &[FileRecord] {
        &self.copied
    }

    pub fn sort_by_name(&mut self) {
        self.source.sort_by(|a, b| a.name.cmp(&b.name));
        self.copied.sort_by(|a, b| a.name.cmp(&b.name));
    }

    pub fn totals(&self) -> RunTotals {
        RunTotals {
            scanned: self.source.len(),
            retired: self.retired,
            copied: self.copied.len(),
            bytes_copied: self.bytes_copied,
        }
    }
}

#[cfg(test)]
#[path = "inventory_tests.rs"]
mod tests;
