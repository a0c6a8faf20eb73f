use std::{
    fs::{self, File, FileTimes, Metadata, OpenOptions},
    io,
    path::Path,
};

use anyhow::{Context, Result, bail};
use log::debug;

/// Deletes a stale file. There is no trash or backup step.
pub fn retire(path: &Path) -> Result<()> {
    fs::remove_file(path).with_context(|| format!("Failed to remove {}", path.display()))?;
    debug!("[retire] removed {}", path.display());
    Ok(())
}

/// Copies `src` to `dest`, replacing whatever is there.
///
/// Besides the bytes, the access/modification times and the permission
/// bits are carried over. Times are set before permissions so a read-only
/// source still yields a read-only copy. Returns the number of bytes
/// written.
///
/// Fails without touching either file when `dest` already resolves to
/// `src` (same path, a symlink to it, or on Unix a hard link), since
/// truncating the destination would wipe the source.
pub fn copy_preserving(src: &Path, dest: &Path) -> Result<u64> {
    let mut reader =
        File::open(src).with_context(|| format!("Failed to open {}", src.display()))?;
    let metadata = reader
        .metadata()
        .with_context(|| format!("Failed to read metadata of {}", src.display()))?;

    if is_same_file(src, &metadata, dest)? {
        bail!(
            "Refusing to copy {} onto itself at {}",
            src.display(),
            dest.display()
        );
    }

    let mut writer = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(dest)
        .with_context(|| format!("Failed to open {} for writing", dest.display()))?;

    let bytes = io::copy(&mut reader, &mut writer).with_context(|| {
        format!("Failed to copy {} to {}", src.display(), dest.display())
    })?;

    let mut times = FileTimes::new().set_modified(
        metadata
            .modified()
            .with_context(|| format!("Failed to read modification time of {}", src.display()))?,
    );
    // Some mounts do not track atime at all.
    if let Ok(accessed) = metadata.accessed() {
        times = times.set_accessed(accessed);
    }

    writer
        .set_times(times)
        .with_context(|| format!("Failed to set timestamps on {}", dest.display()))?;
    writer
        .set_permissions(metadata.permissions())
        .with_context(|| format!("Failed to set permissions on {}", dest.display()))?;

    debug!(
        "[copy] {} -> {} ({} bytes)",
        src.display(),
        dest.display(),
        bytes
    );

    Ok(bytes)
}

/// Whether an existing `dest` is the same filesystem object as `src`.
fn is_same_file(src: &Path, src_meta: &Metadata, dest: &Path) -> Result<bool> {
    let dest_meta = match fs::metadata(dest) {
        Ok(meta) => meta,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(false),
        Err(e) => {
            return Err(e)
                .with_context(|| format!("Failed to read metadata of {}", dest.display()));
        }
    };

    #[cfg(unix)]
    {
        use std::os::unix::fs::MetadataExt;

        let _ = src;
        Ok(src_meta.dev() == dest_meta.dev() && src_meta.ino() == dest_meta.ino())
    }
    #[cfg(not(unix))]
    {
        let _ = (src_meta, dest_meta);
        let src_real = fs::canonicalize(src)
            .with_context(|| format!("Failed to resolve {}", src.display()))?;
        let dest_real = fs::canonicalize(dest)
            .with_context(|| format!("Failed to resolve {}", dest.display()))?;
        Ok(src_real == dest_real)
    }
}

#[cfg(test)]
#[path = "transfer_tests.rs"]
mod tests;
