use std::fs;
use std::io::{Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;

use super::row::Row;

/// A loaded CSV table: header names in file order plus one `Row` per
/// record.
#[derive(Debug, Clone, Default)]
pub struct Frame {
    pub headers: Vec<String>,
    pub rows: Vec<Row>,
}

/// Read a CSV table. Cells are trimmed; rows keep every column so the
/// table can be written back out with extra columns appended.
pub fn read_csv<R: Read>(reader: R) -> Result<Frame, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers: Vec<String> = csv_reader.headers()?.iter().map(str::to_string).collect();

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        let mut row = Row::new();
        for (header, field) in headers.iter().zip(record.iter()) {
            row.insert(header.clone(), field.to_string());
        }
        rows.push(row);
    }

    Ok(Frame { headers, rows })
}

/// Read a CSV file from disk.
pub fn read_csv_path(path: &Path) -> Result<Frame> {
    let file = fs::File::open(path)
        .with_context(|| format!("Failed to open input CSV at {}", path.display()))?;
    read_csv(file).with_context(|| format!("Failed to parse CSV at {}", path.display()))
}

/// Write a frame as CSV. Missing cells are written as empty fields.
pub fn write_csv<W: Write>(frame: &Frame, writer: W) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(&frame.headers)?;
    for row in &frame.rows {
        csv_writer.write_record(frame.headers.iter().map(|h| row.raw(h).unwrap_or("")))?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write a frame to disk atomically, creating parent directories as
/// needed. The file is never left half-written.
pub fn write_csv_path(frame: &Frame, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create output directory at {}", parent.display())
            })?;
        }
    }

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;
    write_csv(frame, &mut file)
        .with_context(|| format!("Failed to write CSV to {}", path.display()))?;
    file.commit()
        .with_context(|| format!("Failed to save output CSV at {}", path.display()))?;

    Ok(())
}

/// Order output columns: the given leading columns first (only those
/// actually present), then the remaining columns in their original
/// order.
pub fn order_headers(headers: &[String], leading: &[&str]) -> Vec<String> {
    let mut ordered: Vec<String> = leading
        .iter()
        .filter(|name| headers.iter().any(|h| h == *name))
        .map(|name| name.to_string())
        .collect();
    for header in headers {
        if !ordered.contains(header) {
            ordered.push(header.clone());
        }
    }
    ordered
}
