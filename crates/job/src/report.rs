use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

use anyhow::{Context, Result};
use sweeper_fs::{FileRecord, format_timestamp};

pub const LOG_HEADER: &str = "Nome, Tamanho(Bytes), Data de Criação, Data da Ultima Modificação";

const FIELD_SEPARATOR: &str = ", ";

/// `name, size, creation_time, modification_time`.
///
/// Names are written verbatim; a comma inside a name shifts the columns.
pub fn render_line(record: &FileRecord) -> String {
    [
        record.name.clone(),
        record.size.to_string(),
        format_timestamp(&record.creation_time),
        format_timestamp(&record.modification_time),
    ]
    .join(FIELD_SEPARATOR)
}

/// Replaces `path` with the header followed by one line per record.
pub fn write_inventory_log(path: &Path, records: &[FileRecord]) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("Failed to create log {}", path.display()))?;
    let mut out = BufWriter::new(file);

    write_records(&mut out, records)
        .and_then(|_| out.flush())
        .with_context(|| format!("Failed to write log {}", path.display()))
}

fn write_records<W: Write>(out: &mut W, records: &[FileRecord]) -> io::Result<()> {
    writeln!(out, "{LOG_HEADER}")?;
    for record in records {
        writeln!(out, "{}", render_line(record))?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
