use chrono::{DateTime, Local, Timelike};

/// One regular file observed in the source directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    /// Base file name, no directory component
    pub name: String,
    /// Size in bytes as reported by the filesystem
    pub size: u64,
    /// Platform creation time. On Unix this is the inode change time.
    pub creation_time: DateTime<Local>,
    /// Last write time
    pub modification_time: DateTime<Local>,
}

/// Renders a timestamp as `YYYY-MM-DD HH:MM:SS[.ffffff]`.
///
/// The fractional part is dropped when the sub-second component is zero.
pub fn format_timestamp(ts: &DateTime<Local>) -> String {
    if ts.nanosecond() / 1_000 == 0 {
        ts.format("%Y-%m-%d %H:%M:%S").to_string()
    } else {
        ts.format("%Y-%m-%d %H:%M:%S%.6f").to_string()
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
