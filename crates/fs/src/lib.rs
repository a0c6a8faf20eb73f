mod record;
mod scan;
mod transfer;

pub use record::{FileRecord, format_timestamp};
pub use scan::{DirScan, creation_time, inspect_entry, scan_dir};
pub use transfer::{copy_preserving, retire};
