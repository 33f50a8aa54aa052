//! CSV export of the enriched table.

use std::path::Path;

use crate::core::{Result, Table};

/// Write the full table (original plus derived columns) as CSV with a header
/// row and no index column. Any failure is fatal; there is no retry.
pub fn export_csv(table: &Table, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;

    writer.write_record(table.headers())?;
    for row in table.rows() {
        writer.write_record(row)?;
    }
    writer.flush()?;

    log::info!("Wrote {} rows to {}", table.len(), path.display());
    Ok(())
}
