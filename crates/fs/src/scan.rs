use std::{
    fs::{self, DirEntry, Metadata, ReadDir},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use log::{debug, trace};

use crate::record::FileRecord;

/// Iterator over the regular files directly inside one directory.
///
/// Entries come out in the order the OS lists them. Subdirectories,
/// symlinks and special files are skipped without recursing. The first
/// failing entry yields an `Err`; callers are expected to stop there.
pub struct DirScan {
    dir: PathBuf,
    entries: ReadDir,
}

/// Opens `dir` for a single, non-recursive pass.
pub fn scan_dir(dir: &Path) -> Result<DirScan> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory {}", dir.display()))?;

    Ok(DirScan {
        dir: dir.to_path_buf(),
        entries,
    })
}

impl Iterator for DirScan {
    /// Full path of the file plus its record.
    type Item = Result<(PathBuf, FileRecord)>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.entries.next()? {
                Ok(entry) => entry,
                Err(e) => {
                    let context = format!("Failed to read entry in {}", self.dir.display());
                    return Some(Err(anyhow::Error::new(e).context(context)));
                }
            };

            match inspect_entry(&entry) {
                Ok(Some(record)) => return Some(Ok((entry.path(), record))),
                Ok(None) => continue,
                Err(e) => return Some(Err(e)),
            }
        }
    }
}

/// Builds a record for `entry` if it is a regular file.
///
/// Uses the entry's own metadata, so a symlink is seen as a symlink and
/// skipped even when it points at a regular file. Such links are never
/// inventoried, retired or copied; an `isfile`-style check that follows
/// links would instead delete the link or copy the target's bytes.
pub fn inspect_entry(entry: &DirEntry) -> Result<Option<FileRecord>> {
    let path = entry.path();
    let metadata = entry
        .metadata()
        .with_context(|| format!("Failed to read metadata of {}", path.display()))?;

    if !metadata.is_file() {
        trace!("[scan] skipping non-regular entry {}", path.display());
        return Ok(None);
    }

    // Non UTF-8 names are kept lossily for the report; the path itself is
    // what later gets deleted or copied.
    let name = entry.file_name().to_string_lossy().into_owned();

    let creation_time = creation_time(&metadata)
        .with_context(|| format!("Failed to read creation time of {}", path.display()))?;
    let modification_time: DateTime<Local> = metadata
        .modified()
        .with_context(|| format!("Failed to read modification time of {}", path.display()))?
        .into();

    debug!(
        "[scan] {} size={} created={} modified={}",
        name,
        metadata.len(),
        creation_time,
        modification_time
    );

    Ok(Some(FileRecord {
        name,
        size: metadata.len(),
        creation_time,
        modification_time,
    }))
}

/// Timestamp used for the age check.
///
/// Unix has no portable birth time, so this is `st_ctime` (last status
/// change). Other platforms report the real creation time.
#[cfg(unix)]
pub fn creation_time(metadata: &Metadata) -> Result<DateTime<Local>> {
    use std::os::unix::fs::MetadataExt;

    let nanos = u32::try_from(metadata.ctime_nsec()).unwrap_or(0);
    DateTime::from_timestamp(metadata.ctime(), nanos)
        .map(|utc| utc.with_timezone(&Local))
        .with_context(|| format!("ctime {} is out of range", metadata.ctime()))
}

#[cfg(not(unix))]
pub fn creation_time(metadata: &Metadata) -> Result<DateTime<Local>> {
    Ok(metadata.created()?.into())
}

#[cfg(test)]
#[path = "scan_tests.rs"]
mod tests;
