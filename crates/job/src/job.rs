use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{debug, info};
use sweeper_fs::{FileRecord, copy_preserving, retire, scan_dir};

use crate::{
    config::JobConfig,
    inventory::{Disposition, Inventory, classify},
    report::write_inventory_log,
};

/// Runs one housekeeping pass.
///
/// Files are handled one at a time in listing order: stale ones are removed
/// from the source, fresh ones copied to the destination. Both inventory logs
/// are written only after every file has been handled. The first error
/// aborts the pass and leaves the filesystem as it is at that point.
pub fn run(config: &JobConfig) -> Result<Inventory> {
    let cutoff = config.cutoff()?;

    info!(
        "[job] source={} destination={} threshold={}d cutoff={}",
        config.source.display(),
        config.destination.display(),
        config.threshold_days,
        cutoff
    );

    let mut inventory = Inventory::default();

    for item in scan_dir(&config.source)? {
        let (path, record) = item?;

        match classify(&record, &cutoff) {
            Disposition::Retire => {
                debug!(
                    "[job] retiring {} (created {})",
                    record.name, record.creation_time
                );
                retire(&path)?;
                inventory.record_retired(record);
            }
            Disposition::Copy => {
                let dest = destination_for(&path, &config.destination)?;
                let bytes = copy_preserving(&path, &dest)?;
                inventory.record_copied(record, bytes);
            }
        }
    }

    if config.sorted_logs {
        inventory.sort_by_name();
    }

    write_inventory_log(&config.from_log, inventory.source())?;
    write_inventory_log(&config.to_log, inventory.copied())?;

    let totals = inventory.totals();
    info!(
        "[job] scanned={} retired={} copied={} bytes_copied={}",
        totals.scanned, totals.retired, totals.copied, totals.bytes_copied
    );

    Ok(inventory)
}

/// Scans and classifies without touching any file or log.
pub fn plan(config: &JobConfig) -> Result<Vec<(FileRecord, Disposition)>> {
    let cutoff = config.cutoff()?;

    let mut planned = scan_dir(&config.source)?
        .map(|item| {
            item.map(|(_, record)| {
                let disposition = classify(&record, &cutoff);
                (record, disposition)
            })
        })
        .collect::<Result<Vec<_>>>()?;

    if config.sorted_logs {
        planned.sort_by(|(a, _), (b, _)| a.name.cmp(&b.name));
    }

    Ok(planned)
}

fn destination_for(src: &Path, destination: &Path) -> Result<PathBuf> {
    let name = src
        .file_name()
        .with_context(|| format!("{} has no file name", src.display()))?;
    Ok(destination.join(name))
}

#[cfg(test)]
#[path = "job_tests.rs"]
mod tests;
