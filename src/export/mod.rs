//! Export of normalized records.
//!
//! This module writes the records of a run to a file in one of three formats:
//! - JSON: pretty-printed array, nested values preserved
//! - CSV: flattened view, one row per record
//! - XLSX: the same flattened view in a single worksheet

mod csv;
mod json;
mod row;
mod xlsx;

use std::path::Path;

use anyhow::{bail, Context, Result};
use log::info;

use crate::config::OutputFormat;
use crate::models::NormalizedRecord;

pub use csv::export_csv;
pub use json::export_json;
pub use row::{flatten_record, FlatCell, COLUMNS};
pub use xlsx::export_xlsx;

/// Writes `records` to `path` in `format`, creating parent directories.
///
/// # Returns
///
/// The number of records written.
///
/// # Errors
///
/// Fails on an empty record list or any I/O or serialization error.
pub fn export_records(
    records: &[NormalizedRecord],
    format: OutputFormat,
    path: &Path,
) -> Result<usize> {
    if records.is_empty() {
        bail!("No records to export");
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory: {}", parent.display()))?;
    }

    match format {
        OutputFormat::Json => export_json(records, path)?,
        OutputFormat::Csv => export_csv(records, path)?,
        OutputFormat::Xlsx => export_xlsx(records, path)?,
    }

    info!(
        "Exported {} record(s) as {} to {}",
        records.len(),
        format,
        path.display()
    );
    Ok(records.len())
}
