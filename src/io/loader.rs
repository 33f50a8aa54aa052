//! CSV ingestion: raw delimited text into an in-memory [`Table`].

use std::path::Path;

use crate::core::{Result, Table};

/// Read a comma-delimited UTF-8 file with a header row into a table.
///
/// Column names are taken verbatim; normalization happens in the cleaner.
/// A ragged or unreadable file is a hard failure, matching the
/// all-or-nothing batch model.
pub fn load_csv(path: &Path) -> Result<Table> {
    let mut reader = csv::ReaderBuilder::new().from_path(path)?;

    let headers = reader
        .headers()?
        .iter()
        .map(|h| h.to_string())
        .collect::<Vec<_>>();
    let mut table = Table::new(headers);

    for record in reader.records() {
        let record = record?;
        table.push_row(record.iter().map(|cell| cell.to_string()).collect())?;
    }

    log::info!(
        "Loaded {} rows x {} columns from {}",
        table.len(),
        table.headers().len(),
        path.display()
    );
    Ok(table)
}
