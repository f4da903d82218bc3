//! JSON export: a pretty-printed array of records.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::models::NormalizedRecord;

pub fn export_json(records: &[NormalizedRecord], path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, records).context("Failed to write JSON")?;
    writer.write_all(b"\n")?;
    writer.flush().context("Failed to flush JSON output")?;
    Ok(())
}
