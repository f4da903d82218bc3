//! CSV export functionality.
//!
//! One row per record with nested fields flattened into JSON strings.

use std::path::Path;

use anyhow::{Context, Result};
use csv::Writer;

use super::row::{flatten_record, COLUMNS};
use crate::models::NormalizedRecord;

pub fn export_csv(records: &[NormalizedRecord], path: &Path) -> Result<()> {
    let mut writer = Writer::from_path(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;

    writer
        .write_record(COLUMNS)
        .context("Failed to write CSV header")?;

    for record in records {
        let row: Vec<String> = flatten_record(record)?.iter().map(|c| c.render()).collect();
        writer
            .write_record(&row)
            .with_context(|| format!("Failed to write CSV row for {}", record.domain))?;
    }

    writer.flush().context("Failed to flush CSV writer")?;
    Ok(())
}
